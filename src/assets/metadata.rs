use std::{io, path::Path};

use crate::{error::StartupError, models::MovieRecord};

/// Loads the movie metadata table from a CSV file with a header row
///
/// Only the `original_title` column is required; any other columns are
/// ignored. Row order is preserved since it defines each movie's row index.
pub fn load_movies(path: &Path) -> Result<Vec<MovieRecord>, StartupError> {
    let to_startup_error = |source| StartupError::Metadata {
        path: path.to_path_buf(),
        source,
    };

    let reader = csv::Reader::from_path(path).map_err(to_startup_error)?;
    read_movies(reader).map_err(to_startup_error)
}

pub fn read_movies<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<MovieRecord>, csv::Error> {
    reader.deserialize::<MovieRecord>().collect()
}
