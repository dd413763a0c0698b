//! Synthetic shock-tube runs for integration tests

use std::path::{Path, PathBuf};

use super::mat_writer::{write_mat, MatArray};

/// Sod initial state advected into a smeared step
///
/// Returns (t, x, rho, u, p) with fields row-major over (nt × nx).
pub fn sod_fields(nt: usize, nx: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let t: Vec<f64> = (0..nt).map(|i| 0.2 * i as f64 / (nt.max(2) - 1) as f64).collect();
    let x: Vec<f64> = (0..nx).map(|j| j as f64 / (nx - 1) as f64).collect();

    let mut rho = Vec::with_capacity(nt * nx);
    let mut u = Vec::with_capacity(nt * nx);
    let mut p = Vec::with_capacity(nt * nx);

    for &time in &t {
        let front = 0.5 + time;
        for &pos in &x {
            let w = 1.0 / (1.0 + ((pos - front) / 0.02).exp());
            rho.push(0.125 + (1.0 - 0.125) * w);
            p.push(0.1 + (1.0 - 0.1) * w);
            u.push(0.9 * w * (1.0 - w));
        }
    }

    (t, x, rho, u, p)
}

/// Write a Sod-like run to `dir/<name>.mat`, fields stored as (nt × nx) matrices
pub fn write_sod_mat(dir: &Path, name: &str, nt: usize, nx: usize) -> PathBuf {
    let (t, x, rho, u, p) = sod_fields(nt, nx);
    let path = dir.join(format!("{}.mat", name));

    write_mat(
        &path,
        &[
            MatArray::row("t", &t),
            MatArray::row("x", &x),
            MatArray::from_row_major("rho", nt, nx, &rho),
            MatArray::from_row_major("u", nt, nx, &u),
            MatArray::from_row_major("p", nt, nx, &p),
        ],
    )
    .unwrap();

    path
}

/// File names (not paths) of the entries of `dir`, sorted
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
