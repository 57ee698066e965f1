//! # Model
//!
//! A parsed model is an ordered list of named groups, each owning an
//! indexed mesh ready for upload.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pasture_core::Mesh;

use crate::builder::ModelBuilder;
use crate::error::{ImportError, ImportResult};

/// Name of the group that is open before the first `g` record.
pub const DEFAULT_GROUP_NAME: &str = "(unnamed)";

/// A named part of a model.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    /// Name from the `g` record, or [`DEFAULT_GROUP_NAME`].
    pub name: String,
    /// Deduplicated vertices and triangle indices.
    pub mesh: Mesh,
}

/// An imported model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    groups: Vec<Group>,
}

impl Model {
    pub(crate) fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Parses model source held in memory.
    ///
    /// Never fails; malformed records are skipped. Empty input yields a
    /// single empty group named [`DEFAULT_GROUP_NAME`].
    #[must_use]
    pub fn parse(source: &str, generate_normals: bool) -> Self {
        let mut builder = ModelBuilder::new(generate_normals);
        for line in source.lines() {
            builder.push_line(line);
        }
        builder.finish()
    }

    /// Parses model source line by line from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Read`] if the reader fails.
    pub fn from_reader<R: BufRead>(reader: R, generate_normals: bool) -> ImportResult<Self> {
        let mut builder = ModelBuilder::new(generate_normals);
        for line in reader.lines() {
            builder.push_line(&line?);
        }
        Ok(builder.finish())
    }

    /// Loads a model file.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Open`] if the file cannot be opened and
    /// [`ImportError::Read`] if reading it fails.
    pub fn from_path(path: impl AsRef<Path>, generate_normals: bool) -> ImportResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loading model");
        Self::from_reader(BufReader::new(file), generate_normals)
    }

    /// All groups in file order.
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// First group with the given name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Consumes the model, returning its groups.
    #[must_use]
    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }
}
