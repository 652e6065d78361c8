//! Output selection and source-code emission of kernels.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Algorithm, KernelError, KernelSamples, Result};

/// What to do with a generated kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    /// GLSL `const vec4` array literal.
    C,
    /// 3D quiver plot image.
    #[default]
    Plot,
    /// Histogram of sample lengths.
    Plot2d,
    /// WGSL `const` array.
    Wgsl,
    /// JSON document.
    Json,
    /// Packed `vec4<f32>` records.
    Raw,
}

impl OutputFormat {
    /// All output selectors, in CLI order.
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::C,
        OutputFormat::Plot,
        OutputFormat::Plot2d,
        OutputFormat::Wgsl,
        OutputFormat::Json,
        OutputFormat::Raw,
    ];

    /// Returns the selector name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::C => "c",
            OutputFormat::Plot => "plot",
            OutputFormat::Plot2d => "plot2d",
            OutputFormat::Wgsl => "wgsl",
            OutputFormat::Json => "json",
            OutputFormat::Raw => "raw",
        }
    }

    /// Returns true for the image outputs.
    #[must_use]
    pub fn is_plot(self) -> bool {
        matches!(self, OutputFormat::Plot | OutputFormat::Plot2d)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = KernelError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(value: OutputFormat) -> Self {
        value.name().to_string()
    }
}

impl FromStr for OutputFormat {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|o| o.name() == s)
            .ok_or_else(|| KernelError::UnknownOutput(s.to_string()))
    }
}

/// Writes the kernel as a GLSL array literal.
///
/// ```text
/// const vec4 n[2] = vec4[](
///     vec4(0.1, 0.2, 0.3, 0),
///     vec4(0.4, 0.5, 0.6, 0)
/// );
/// ```
pub fn write_glsl<W: Write + ?Sized>(samples: &KernelSamples, out: &mut W) -> Result<()> {
    let body = samples
        .iter()
        .map(|v| format!("    vec4({}, {}, {}, 0)", v.x, v.y, v.z))
        .collect::<Vec<_>>()
        .join(",\n");

    writeln!(out, "const vec4 n[{}] = vec4[](", samples.len())?;
    writeln!(out, "{body}")?;
    writeln!(out, ");")?;
    Ok(())
}

/// Writes the kernel as a WGSL module-scope constant.
pub fn write_wgsl<W: Write + ?Sized>(samples: &KernelSamples, out: &mut W) -> Result<()> {
    let n = samples.len();
    // Debug formatting keeps a decimal point, so values stay float literals
    let body = samples
        .iter()
        .map(|v| format!("    vec4<f32>({:?}, {:?}, {:?}, 0.0)", v.x, v.y, v.z))
        .collect::<Vec<_>>()
        .join(",\n");

    writeln!(
        out,
        "const SSAO_KERNEL: array<vec4<f32>, {n}> = array<vec4<f32>, {n}>("
    )?;
    writeln!(out, "{body}")?;
    writeln!(out, ");")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonKernel {
    algorithm: Algorithm,
    count: usize,
    samples: Vec<[f32; 4]>,
}

/// Writes the kernel as a pretty-printed JSON document.
pub fn write_json<W: Write + ?Sized>(
    algorithm: Algorithm,
    samples: &KernelSamples,
    out: &mut W,
) -> Result<()> {
    let doc = JsonKernel {
        algorithm,
        count: samples.len(),
        samples: samples.to_vec4().iter().map(|v| v.to_array()).collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the kernel as packed 16-byte `vec4<f32>` records in native byte order.
pub fn write_raw<W: Write + ?Sized>(samples: &KernelSamples, out: &mut W) -> Result<()> {
    let gpu = samples.to_gpu();
    out.write_all(bytemuck::cast_slice(&gpu))?;
    Ok(())
}

/// Emits a kernel in one of the text or binary formats.
///
/// # Errors
/// Returns [`KernelError::UnknownOutput`] for the plot formats, which are
/// rendered by the plot crate instead.
pub fn export<W: Write + ?Sized>(
    format: OutputFormat,
    algorithm: Algorithm,
    samples: &KernelSamples,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::C => write_glsl(samples, out),
        OutputFormat::Wgsl => write_wgsl(samples, out),
        OutputFormat::Json => write_json(algorithm, samples, out),
        OutputFormat::Raw => write_raw(samples, out),
        OutputFormat::Plot | OutputFormat::Plot2d => {
            Err(KernelError::UnknownOutput(format.name().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn sample_kernel() -> KernelSamples {
        KernelSamples::from_points(&[Vec3::new(0.5, 0.25, -0.125), Vec3::new(0.0, 1.0, 0.0)])
    }

    fn to_string(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_parse() {
        for format in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
        }
        assert!(matches!(
            "svg".parse::<OutputFormat>(),
            Err(KernelError::UnknownOutput(name)) if name == "svg"
        ));
        assert!(OutputFormat::Plot2d.is_plot());
        assert!(!OutputFormat::C.is_plot());
    }

    #[test]
    fn test_glsl_literal() {
        let text = to_string(|buf| write_glsl(&sample_kernel(), buf));
        assert_eq!(
            text,
            "const vec4 n[2] = vec4[](\n    vec4(0.5, 0.25, -0.125, 0),\n    vec4(0, 1, 0, 0)\n);\n"
        );
    }

    #[test]
    fn test_glsl_empty() {
        let text = to_string(|buf| write_glsl(&KernelSamples::default(), buf));
        assert_eq!(text, "const vec4 n[0] = vec4[](\n\n);\n");
    }

    #[test]
    fn test_wgsl_literal() {
        let text = to_string(|buf| write_wgsl(&sample_kernel(), buf));
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("const SSAO_KERNEL: array<vec4<f32>, 2> = array<vec4<f32>, 2>(")
        );
        assert_eq!(lines.next(), Some("    vec4<f32>(0.5, 0.25, -0.125, 0.0),"));
        assert_eq!(lines.next(), Some("    vec4<f32>(0.0, 1.0, 0.0, 0.0)"));
        assert_eq!(lines.next(), Some(");"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_document() {
        let text = to_string(|buf| write_json(Algorithm::Poisson, &sample_kernel(), buf));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["algorithm"], "poisson");
        assert_eq!(value["count"], 2);
        assert_eq!(value["samples"][1], serde_json::json!([0.0, 1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_raw_layout() {
        let mut buf = Vec::new();
        write_raw(&sample_kernel(), &mut buf).unwrap();
        assert_eq!(buf.len(), 32);
        let floats: Vec<f32> = buf
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        assert_eq!(floats, vec![0.5, 0.25, -0.125, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_export_rejects_plot() {
        let mut buf = Vec::new();
        let err = export(OutputFormat::Plot, Algorithm::Uniform, &sample_kernel(), &mut buf);
        assert!(matches!(err, Err(KernelError::UnknownOutput(_))));
        assert!(buf.is_empty());
    }
}
