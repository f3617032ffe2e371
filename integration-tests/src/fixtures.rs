use std::{fs, io, path::Path};

use exemplar_core::Dataset;

/// A dataset with `x = 0, 1, 2, ...` and the given y values.
///
/// # Panics
///
/// Panics if `ys` is empty or holds a non-finite value.
#[must_use]
pub fn series(name: &str, ys: &[f64]) -> Dataset {
    let xs = (0..ys.len()).map(|i| i as f64).collect();
    Dataset::new(name, xs, ys.to_vec()).expect("fixture series must be valid")
}

/// A few periods of a sine wave with a slow drift, sampled at integer x.
#[must_use]
pub fn drifting_wave(name: &str, len: usize) -> Dataset {
    let ys: Vec<f64> = (0..len)
        .map(|i| {
            let x = i as f64;
            (x * 0.55).sin() * 3.0 + x * 0.2
        })
        .collect();
    series(name, &ys)
}

/// Writes `xs`/`ys` to `dir/name` as a two-column CSV with a header.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_csv(dir: &Path, name: &str, xs: &[f64], ys: &[f64]) -> io::Result<()> {
    let mut contents = String::from("x,y\n");
    for (x, y) in xs.iter().zip(ys) {
        contents.push_str(&format!("{x},{y}\n"));
    }
    fs::write(dir.join(name), contents)
}
