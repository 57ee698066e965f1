//! # Model Builder
//!
//! Consumes records in file order. Attribute lists are file-wide; output
//! vertices belong to the group under construction and are deduplicated by
//! their [`FaceVertex`] key. The key map is cleared whenever a new group
//! starts, so a vertex used by two groups appears in both.

use std::collections::HashMap;

use glam::{Vec2, Vec3};
use pasture_core::{IndexType, Mesh, Vertex, MAX_VERTICES};

use crate::face::{AttributeCounts, FaceVertex};
use crate::model::{Group, Model, DEFAULT_GROUP_NAME};
use crate::record::Record;

/// Incremental model construction.
#[derive(Debug)]
pub struct ModelBuilder {
    generate_normals: bool,
    positions: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    normals: Vec<Vec3>,
    groups: Vec<Group>,
    current: GroupBuilder,
}

#[derive(Debug)]
struct GroupBuilder {
    name: String,
    vertices: Vec<Vertex>,
    indices: Vec<IndexType>,
    lookup: HashMap<FaceVertex, IndexType>,
    overflowed: bool,
}

impl GroupBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            vertices: Vec::new(),
            indices: Vec::new(),
            lookup: HashMap::new(),
            overflowed: false,
        }
    }
}

impl ModelBuilder {
    /// Starts an empty model with the default group open.
    #[must_use]
    pub fn new(generate_normals: bool) -> Self {
        Self {
            generate_normals,
            positions: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            groups: Vec::new(),
            current: GroupBuilder::new(DEFAULT_GROUP_NAME),
        }
    }

    /// Feeds one line of source.
    pub fn push_line(&mut self, line: &str) {
        if let Some(record) = Record::parse(line) {
            self.push_record(record);
        }
    }

    /// Feeds one parsed record.
    pub fn push_record(&mut self, record: Record<'_>) {
        match record {
            Record::Position(p) => self.positions.push(p),
            Record::TexCoord(t) => self.tex_coords.push(t),
            Record::Normal(n) => self.normals.push(n),
            Record::Face(slots) => self.push_face(&slots),
            Record::Group(name) => {
                let name = if name.is_empty() { DEFAULT_GROUP_NAME } else { name };
                self.begin_group(name);
            }
        }
    }

    /// Closes the last group and returns the model.
    #[must_use]
    pub fn finish(mut self) -> Model {
        self.end_group();

        let model = Model::from_groups(self.groups);
        tracing::debug!(
            groups = model.groups().len(),
            positions = self.positions.len(),
            vertices = model.groups().iter().map(|g| g.mesh.vertex_count()).sum::<usize>(),
            indices = model.groups().iter().map(|g| g.mesh.index_count()).sum::<usize>(),
            "Parsed model"
        );
        model
    }

    fn counts(&self) -> AttributeCounts {
        AttributeCounts {
            positions: self.positions.len(),
            tex_coords: self.tex_coords.len(),
            normals: self.normals.len(),
        }
    }

    fn begin_group(&mut self, name: &str) {
        self.end_group();
        self.current = GroupBuilder::new(name);
    }

    fn end_group(&mut self) {
        let finished = std::mem::replace(&mut self.current, GroupBuilder::new(DEFAULT_GROUP_NAME));
        let mut mesh = Mesh::new(finished.vertices, finished.indices);
        if self.generate_normals {
            mesh.generate_smooth_normals();
        }
        self.groups.push(Group {
            name: finished.name,
            mesh,
        });
    }

    fn push_face(&mut self, slots: &[&str]) {
        let counts = self.counts();
        let Some(face) = slots
            .iter()
            .map(|slot| FaceVertex::parse(slot, counts))
            .collect::<Option<Vec<_>>>()
        else {
            tracing::trace!(?slots, "Skipping face with unresolvable position");
            return;
        };

        if face.len() < 3 {
            tracing::trace!(?slots, "Skipping face with fewer than three vertices");
            return;
        }

        // Fan around the first vertex.
        for i in 1..face.len() - 1 {
            let triangle = [face[0], face[i], face[i + 1]];
            let mut resolved = [0; 3];
            for (out, key) in resolved.iter_mut().zip(triangle) {
                match self.output_index(key) {
                    Some(index) => *out = index,
                    None => return,
                }
            }
            self.current.indices.extend_from_slice(&resolved);
        }
    }

    /// Output index for a face vertex, allocating it on first use.
    fn output_index(&mut self, key: FaceVertex) -> Option<IndexType> {
        if let Some(&index) = self.current.lookup.get(&key) {
            return Some(index);
        }

        let next = self.current.vertices.len();
        if next >= MAX_VERTICES {
            if !self.current.overflowed {
                self.current.overflowed = true;
                tracing::warn!(
                    group = %self.current.name,
                    max = MAX_VERTICES,
                    "Group exceeds 16-bit vertex limit, dropping further faces"
                );
            }
            return None;
        }
        let index = IndexType::try_from(next).ok()?;

        let position = self.positions[key.vi as usize];
        let normal = key.ni.map_or(Vertex::UP, |n| self.normals[n as usize]);
        let tex_coords = key.ti.map_or(Vec2::ZERO, |t| self.tex_coords[t as usize]);

        self.current.vertices.push(Vertex::new(position, normal, tex_coords));
        self.current.lookup.insert(key, index);
        Some(index)
    }
}
