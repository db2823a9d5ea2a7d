use std::fs;
use std::path::Path;

use log::warn;

use super::ShaderError;

/// Section of a two-section shader file that subsequent lines belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Vertex,
    Fragment,
}

/// Vertex and fragment shader source text split out of one shader file.
///
/// Built once per program, handed to [`crate::ShaderProgram::build`], and
/// discarded after linking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    /// Reads the shader file at `path` and splits it into its two sections.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Splits `text` into vertex and fragment source strings.
    ///
    /// A line containing `"shader"` is a section marker and is consumed
    /// without being copied to either output. A marker also containing
    /// `"vertex"` or `"fragment"` selects the section the following lines
    /// accumulate into; a marker with neither keeps the previous section.
    /// Every other line is appended verbatim, plus a trailing newline, to
    /// the active section. Lines seen before the first marker have no
    /// section and are discarded.
    pub fn parse(text: &str) -> Self {
        let mut source = ShaderSource::default();
        let mut section = Section::None;
        let mut dropped = 0usize;

        for line in text.lines() {
            if line.contains("shader") {
                if line.contains("vertex") {
                    section = Section::Vertex;
                } else if line.contains("fragment") {
                    section = Section::Fragment;
                }
                continue;
            }

            let out = match section {
                Section::Vertex => &mut source.vertex,
                Section::Fragment => &mut source.fragment,
                Section::None => {
                    dropped += 1;
                    continue;
                }
            };
            out.push_str(line);
            out.push('\n');
        }

        if dropped > 0 {
            warn!("Discarded {dropped} line(s) before the first shader section marker");
        }

        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_input() {
        let source = ShaderSource::parse("");
        assert_eq!(source.vertex, "");
        assert_eq!(source.fragment, "");
    }

    #[test]
    fn test_no_markers_discards_everything() {
        let source = ShaderSource::parse("void main() {}\nfloat x;\n");
        assert_eq!(source.vertex, "");
        assert_eq!(source.fragment, "");
    }

    #[test]
    fn test_minimal_two_sections() {
        let source = ShaderSource::parse("vertex shader\nA\nfragment shader\nB\n");
        assert_eq!(source.vertex, "A\n");
        assert_eq!(source.fragment, "B\n");
    }

    #[test]
    fn test_lines_accumulate_in_order() {
        let text = "#shader vertex\nv1\nv2\nv3\n#shader fragment\nf1\nf2\n";
        let source = ShaderSource::parse(text);
        assert_eq!(source.vertex, "v1\nv2\nv3\n");
        assert_eq!(source.fragment, "f1\nf2\n");
    }

    #[test]
    fn test_markers_never_in_output() {
        let text = "#shader vertex\nin vec4 position;\n#shader fragment\nout vec4 color;\n";
        let source = ShaderSource::parse(text);
        assert!(!source.vertex.contains("shader"));
        assert!(!source.fragment.contains("shader"));
    }

    #[test]
    fn test_marker_without_kind_keeps_section() {
        let text = "#shader vertex\nA\n// shader internals\nB\n";
        let source = ShaderSource::parse(text);
        assert_eq!(source.vertex, "A\nB\n");
        assert_eq!(source.fragment, "");
    }

    #[test]
    fn test_pre_marker_lines_dropped() {
        let text = "stray line\n#shader fragment\nF\n";
        let source = ShaderSource::parse(text);
        assert_eq!(source.vertex, "");
        assert_eq!(source.fragment, "F\n");
    }

    #[test]
    fn test_sections_can_repeat() {
        let text = "#shader vertex\nA\n#shader fragment\nB\n#shader vertex\nC\n";
        let source = ShaderSource::parse(text);
        assert_eq!(source.vertex, "A\nC\n");
        assert_eq!(source.fragment, "B\n");
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let text = "#shader vertex\n\nA\n";
        let source = ShaderSource::parse(text);
        assert_eq!(source.vertex, "\nA\n");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#shader vertex\nA\n#shader fragment\nB\n").unwrap();

        let source = ShaderSource::from_file(file.path()).unwrap();
        assert_eq!(source.vertex, "A\n");
        assert_eq!(source.fragment, "B\n");
    }

    #[test]
    fn test_from_missing_file() {
        let result = ShaderSource::from_file("/nonexistent/basic.shader");
        assert!(matches!(result, Err(ShaderError::Io(_))));
    }
}
