//! Result file discovery and loading
//!
//! A result file is a MATLAB Level-5 container with five numeric entries:
//!
//! | Entry | Shape | Meaning |
//! |-------|-------|---------|
//! | `t`   | 1 × nt | time samples |
//! | `x`   | 1 × nx | spatial coordinate |
//! | `rho` | nt·nx elements | density |
//! | `u`   | nt·nx elements | velocity |
//! | `p`   | nt·nx elements | pressure |

use log::debug;
use matfile::{MatFile, NumericData};
use nalgebra::DMatrix;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::matrix::{reshape, RawArray};
use crate::physics::{DerivationError, Field, IdealGas};

/// Entry holding the time vector
pub const TIME_KEY: &str = "t";

/// Entry holding the space vector
pub const SPACE_KEY: &str = "x";

/// Extension of result files
pub const RESULT_EXTENSION: &str = "mat";

/// Errors raised while reading a result file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read result file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed MAT container: {0}")]
    Parse(String),

    #[error("missing entry `{key}`")]
    MissingKey { key: &'static str },

    #[error("entry `{key}` holds complex data")]
    Complex { key: &'static str },

    #[error("entry `{key}` is empty")]
    EmptyAxis { key: &'static str },

    #[error("entry `{key}` has {found} elements, expected {expected} (nt × nx)")]
    ShapeMismatch {
        key: &'static str,
        expected: usize,
        found: usize,
    },
}

// =================================================================================================
// Loaded data
// =================================================================================================

/// One shock-tube run, fields shaped (nt × nx)
#[derive(Debug, Clone)]
pub struct ShockTubeData {
    /// File stem, used as the prefix of every image written for this run
    pub name: String,

    pub time: Vec<f64>,
    pub space: Vec<f64>,

    pub density: DMatrix<f64>,
    pub velocity: DMatrix<f64>,
    pub pressure: DMatrix<f64>,
}

impl ShockTubeData {
    /// Build from raw arrays, checking that every field holds nt·nx values
    pub fn from_arrays(
        name: impl Into<String>,
        time: &RawArray,
        space: &RawArray,
        density: &RawArray,
        velocity: &RawArray,
        pressure: &RawArray,
    ) -> Result<Self, LoadError> {
        if time.is_empty() {
            return Err(LoadError::EmptyAxis { key: TIME_KEY });
        }
        if space.is_empty() {
            return Err(LoadError::EmptyAxis { key: SPACE_KEY });
        }

        let time = time.row_major();
        let space = space.row_major();
        let (nt, nx) = (time.len(), space.len());

        let shaped = |field: Field, raw: &RawArray| -> Result<DMatrix<f64>, LoadError> {
            let key = field.key().unwrap_or_default();
            reshape(&raw.row_major(), nt, nx).ok_or(LoadError::ShapeMismatch {
                key,
                expected: nt * nx,
                found: raw.len(),
            })
        };

        Ok(Self {
            name: name.into(),
            density: shaped(Field::Density, density)?,
            velocity: shaped(Field::Velocity, velocity)?,
            pressure: shaped(Field::Pressure, pressure)?,
            time,
            space,
        })
    }

    /// Number of time samples
    pub fn nt(&self) -> usize {
        self.time.len()
    }

    /// Number of spatial samples
    pub fn nx(&self) -> usize {
        self.space.len()
    }

    /// Stored field matrix, `None` for derived fields
    pub fn field(&self, field: Field) -> Option<&DMatrix<f64>> {
        match field {
            Field::Density => Some(&self.density),
            Field::Velocity => Some(&self.velocity),
            Field::Pressure => Some(&self.pressure),
            Field::Energy => None,
        }
    }

    /// Specific total energy over the whole grid
    pub fn derive_energy(&self, gas: &IdealGas) -> Result<DMatrix<f64>, DerivationError> {
        gas.derive_energy(&self.pressure, &self.velocity, &self.density)
    }
}

// =================================================================================================
// File access
// =================================================================================================

/// List result files in `dir` whose extension is exactly `extension`
///
/// Sorted by path so batches run in a stable order. An empty list is
/// not an error.
pub fn discover_result_files(dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path.extension().and_then(|e| e.to_str()) == Some(extension);
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load and reshape the result file at `path`
pub fn load_result_file(path: &Path) -> Result<ShockTubeData, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mat = MatFile::parse(reader).map_err(|e| LoadError::Parse(format!("{:?}", e)))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let time = read_array(&mat, TIME_KEY)?;
    let space = read_array(&mat, SPACE_KEY)?;
    let density = read_array(&mat, "rho")?;
    let velocity = read_array(&mat, "u")?;
    let pressure = read_array(&mat, "p")?;

    debug!(
        "{}: t{:?} x{:?} rho{:?} u{:?} p{:?}",
        path.display(),
        time.shape,
        space.shape,
        density.shape,
        velocity.shape,
        pressure.shape
    );

    ShockTubeData::from_arrays(name, &time, &space, &density, &velocity, &pressure)
}

fn read_array(mat: &MatFile, key: &'static str) -> Result<RawArray, LoadError> {
    let array = mat
        .find_by_name(key)
        .ok_or(LoadError::MissingKey { key })?;
    let data = real_values(array.data(), key)?;
    Ok(RawArray::new(array.size().to_vec(), data))
}

/// Real part of any numeric class, widened to f64
fn real_values(data: &NumericData, key: &'static str) -> Result<Vec<f64>, LoadError> {
    macro_rules! widen {
        ($real:expr, $imag:expr) => {{
            if $imag.is_some() {
                return Err(LoadError::Complex { key });
            }
            Ok($real.iter().map(|&v| v as f64).collect())
        }};
    }

    match data {
        NumericData::Double { real, imag } => widen!(real, imag),
        NumericData::Single { real, imag } => widen!(real, imag),
        NumericData::Int8 { real, imag } => widen!(real, imag),
        NumericData::UInt8 { real, imag } => widen!(real, imag),
        NumericData::Int16 { real, imag } => widen!(real, imag),
        NumericData::UInt16 { real, imag } => widen!(real, imag),
        NumericData::Int32 { real, imag } => widen!(real, imag),
        NumericData::UInt32 { real, imag } => widen!(real, imag),
        NumericData::Int64 { real, imag } => widen!(real, imag),
        NumericData::UInt64 { real, imag } => widen!(real, imag),
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn sample(nt: usize, nx: usize) -> [RawArray; 5] {
        let t: Vec<f64> = (0..nt).map(|i| i as f64 * 0.1).collect();
        let x: Vec<f64> = (0..nx).map(|j| j as f64 / nx as f64).collect();
        let flat: Vec<f64> = (0..nt * nx).map(|k| 1.0 + k as f64).collect();
        [
            RawArray::row(t),
            RawArray::row(x),
            RawArray::new(vec![nt * nx, 1], flat.clone()),
            RawArray::new(vec![nt * nx, 1], vec![0.0; nt * nx]),
            RawArray::new(vec![nt * nx, 1], flat),
        ]
    }

    #[test]
    fn test_from_arrays_shapes() {
        let [t, x, rho, u, p] = sample(3, 4);
        let data = ShockTubeData::from_arrays("sod", &t, &x, &rho, &u, &p).unwrap();

        assert_eq!(data.nt(), 3);
        assert_eq!(data.nx(), 4);
        assert_eq!(data.density.shape(), (3, 4));
        // row i holds the i-th block of nx stored values
        assert_eq!(data.density[(1, 0)], 5.0);
        assert_eq!(data.field(Field::Pressure).unwrap()[(2, 3)], 12.0);
        assert!(data.field(Field::Energy).is_none());
    }

    #[test]
    fn test_from_arrays_shape_mismatch_names_key() {
        let [t, x, rho, u, _] = sample(3, 4);
        let short = RawArray::row(vec![1.0; 11]);

        match ShockTubeData::from_arrays("sod", &t, &x, &rho, &u, &short) {
            Err(LoadError::ShapeMismatch { key, expected, found }) => {
                assert_eq!(key, "p");
                assert_eq!(expected, 12);
                assert_eq!(found, 11);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_arrays_empty_axis() {
        let [_, x, rho, u, p] = sample(3, 4);
        let empty = RawArray::row(vec![]);
        assert!(matches!(
            ShockTubeData::from_arrays("sod", &empty, &x, &rho, &u, &p),
            Err(LoadError::EmptyAxis { key: "t" })
        ));
    }

    #[test]
    fn test_discover_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.mat", "a.mat", "notes.txt", "c.MAT", "mat"] {
            File::create(dir.path().join(name)).unwrap();
        }
        std::fs::create_dir(dir.path().join("dir.mat")).unwrap();

        let found = discover_result_files(dir.path(), RESULT_EXTENSION).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.mat", "b.mat"]);
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_result_files(dir.path(), RESULT_EXTENSION).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_result_file(Path::new("/nonexistent/run.mat")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.mat");
        std::fs::write(&path, b"not a mat file").unwrap();
        assert!(load_result_file(&path).is_err());
    }
}
