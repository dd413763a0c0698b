//! Minimal MATLAB Level-5 writer for test fixtures
//!
//! Writes uncompressed 2-D numeric matrices of class double, single or
//! int16, optionally with an imaginary part.

use std::fs;
use std::io;
use std::path::Path;

const MI_INT8: u32 = 1;
const MI_INT16: u32 = 3;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_SINGLE: u32 = 7;
const MI_DOUBLE: u32 = 9;
const MI_MATRIX: u32 = 14;

const MX_DOUBLE_CLASS: u32 = 6;
const MX_SINGLE_CLASS: u32 = 7;
const MX_INT16_CLASS: u32 = 10;

/// Array flag marking a complex matrix
const FLAG_COMPLEX: u32 = 0x0800;

/// Numeric class of a stored matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatClass {
    Double,
    Single,
    Int16,
}

impl MatClass {
    fn class_code(self) -> u32 {
        match self {
            MatClass::Double => MX_DOUBLE_CLASS,
            MatClass::Single => MX_SINGLE_CLASS,
            MatClass::Int16 => MX_INT16_CLASS,
        }
    }

    /// Data element tag and encoded bytes of `values` in this class
    fn encode(self, values: &[f64]) -> (u32, Vec<u8>) {
        match self {
            MatClass::Double => (MI_DOUBLE, values.iter().flat_map(|v| v.to_le_bytes()).collect()),
            MatClass::Single => (
                MI_SINGLE,
                values.iter().flat_map(|&v| (v as f32).to_le_bytes()).collect(),
            ),
            MatClass::Int16 => (
                MI_INT16,
                values.iter().flat_map(|&v| (v as i16).to_le_bytes()).collect(),
            ),
        }
    }
}

/// Named matrix, `data` column-major over (rows × cols)
pub struct MatArray {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    pub class: MatClass,
    pub data: Vec<f64>,

    /// Imaginary part, same layout as `data`
    pub imag: Option<Vec<f64>>,
}

impl MatArray {
    /// 1 × n row vector
    pub fn row(name: &str, values: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            rows: 1,
            cols: values.len(),
            class: MatClass::Double,
            data: values.to_vec(),
            imag: None,
        }
    }

    /// n × 1 column vector
    pub fn column(name: &str, values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            ..Self::row(name, values)
        }
    }

    /// (rows × cols) matrix from row-major values
    pub fn from_row_major(name: &str, rows: usize, cols: usize, values: &[f64]) -> Self {
        assert_eq!(values.len(), rows * cols);
        let data = (0..cols)
            .flat_map(|j| (0..rows).map(move |i| values[i * cols + j]))
            .collect();
        Self {
            name: name.to_string(),
            rows,
            cols,
            class: MatClass::Double,
            data,
            imag: None,
        }
    }

    /// Store with numeric class `class` (values are cast on write)
    pub fn of_class(mut self, class: MatClass) -> Self {
        self.class = class;
        self
    }

    /// Attach an imaginary part, making the matrix complex
    pub fn with_imag(mut self, imag: &[f64]) -> Self {
        assert_eq!(imag.len(), self.data.len());
        self.imag = Some(imag.to_vec());
        self
    }
}

pub fn write_mat(path: &Path, arrays: &[MatArray]) -> io::Result<()> {
    let mut bytes = header();
    for array in arrays {
        bytes.extend(matrix_element(array));
    }
    fs::write(path, bytes)
}

fn header() -> Vec<u8> {
    let mut text = b"MATLAB 5.0 MAT-file, Platform: test, Created by: shocktube-plot tests".to_vec();
    text.resize(116, b' ');
    text.extend([0u8; 8]); // subsystem data offset
    text.extend(0x0100u16.to_le_bytes());
    text.extend(b"IM");
    text
}

fn push_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend(value.to_le_bytes());
}

fn pad8(buf: &mut Vec<u8>) {
    while buf.len() % 8 != 0 {
        buf.push(0);
    }
}

fn matrix_element(array: &MatArray) -> Vec<u8> {
    let mut body = Vec::new();

    // array flags
    push_u32(&mut body, MI_UINT32);
    push_u32(&mut body, 8);
    let complex = if array.imag.is_some() { FLAG_COMPLEX } else { 0 };
    push_u32(&mut body, array.class.class_code() | complex);
    push_u32(&mut body, 0);

    // dimensions
    push_u32(&mut body, MI_INT32);
    push_u32(&mut body, 8);
    body.extend((array.rows as i32).to_le_bytes());
    body.extend((array.cols as i32).to_le_bytes());

    // name
    let name = array.name.as_bytes();
    push_u32(&mut body, MI_INT8);
    push_u32(&mut body, name.len() as u32);
    body.extend(name);
    pad8(&mut body);

    // real part, then imaginary part if any
    push_numeric(&mut body, array.class, &array.data);
    if let Some(imag) = &array.imag {
        push_numeric(&mut body, array.class, imag);
    }

    let mut element = Vec::with_capacity(body.len() + 8);
    push_u32(&mut element, MI_MATRIX);
    push_u32(&mut element, body.len() as u32);
    element.extend(body);
    element
}

fn push_numeric(buf: &mut Vec<u8>, class: MatClass, values: &[f64]) {
    let (tag, bytes) = class.encode(values);
    push_u32(buf, tag);
    push_u32(buf, bytes.len() as u32);
    buf.extend(bytes);
    pad8(buf);
}
