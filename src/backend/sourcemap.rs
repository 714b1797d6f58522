//! Source-map v3 generation
//!
//! Walks an emitted [`Fragment`] tree, accumulating the generated text and
//! recording one mapping at the start of every origin-carrying text chunk
//! and after every newline inside one. The mappings are delta-encoded as
//! base64 VLQ segments per the source-map v3 format.

use serde::Serialize;

use crate::backend::fragment::{Chunk, Fragment};
use crate::utils::Position;

/// The JSON document written next to the generated code.
#[derive(Debug, Serialize)]
pub struct SourceMap {
    pub version: u32,
    pub file: String,
    pub sources: Vec<String>,
    pub names: Vec<String>,
    pub mappings: String,
}

/// Generated code plus its source map.
#[derive(Debug)]
pub struct Output {
    pub code: String,
    pub map: SourceMap,
}

/// Flatten the fragment tree into generated code and the source map that
/// ties every origin-carrying character back to `source_file`.
pub fn to_string_with_source_map(root: &Fragment, source_file: &str, out_file: &str) -> Output {
    let mut walker = Walker::default();
    walker.walk(root, root.origin);
    Output {
        code: walker.code,
        map: SourceMap {
            version: 3,
            file: out_file.to_string(),
            sources: vec![source_file.to_string()],
            names: Vec::new(),
            mappings: encode_mappings(&walker.mappings),
        },
    }
}

/// One raw mapping; all fields 0-based.
struct Mapping {
    gen_line: u32,
    gen_col: u32,
    src_line: u32,
    src_col: u32,
}

#[derive(Default)]
struct Walker {
    code: String,
    mappings: Vec<Mapping>,
    gen_line: u32,
    gen_col: u32,
}

impl Walker {
    fn walk(&mut self, fragment: &Fragment, inherited: Option<Position>) {
        let origin = fragment.origin.or(inherited);
        for chunk in &fragment.chunks {
            match chunk {
                Chunk::Text(text) => self.write_text(text, origin),
                Chunk::Child(child) => self.walk(child, origin),
            }
        }
    }

    fn write_text(&mut self, text: &str, origin: Option<Position>) {
        let mut need_mapping = true;
        for c in text.chars() {
            if c == '\n' {
                self.code.push(c);
                self.gen_line += 1;
                self.gen_col = 0;
                need_mapping = true;
                continue;
            }
            if need_mapping {
                if let Some(position) = origin {
                    self.mappings.push(Mapping {
                        gen_line: self.gen_line,
                        gen_col: self.gen_col,
                        src_line: position.line.saturating_sub(1),
                        src_col: position.col,
                    });
                }
                need_mapping = false;
            }
            self.code.push(c);
            self.gen_col += 1;
        }
    }
}

fn encode_mappings(mappings: &[Mapping]) -> String {
    let mut out = String::new();
    let mut gen_line = 0;
    let mut prev_gen_col = 0;
    let mut prev_src_line = 0;
    let mut prev_src_col = 0;
    let mut line_has_segment = false;

    for mapping in mappings {
        while gen_line < mapping.gen_line {
            out.push(';');
            gen_line += 1;
            prev_gen_col = 0;
            line_has_segment = false;
        }
        if line_has_segment {
            out.push(',');
        }
        encode_vlq(&mut out, i64::from(mapping.gen_col) - prev_gen_col);
        encode_vlq(&mut out, 0); // single source file
        encode_vlq(&mut out, i64::from(mapping.src_line) - prev_src_line);
        encode_vlq(&mut out, i64::from(mapping.src_col) - prev_src_col);
        prev_gen_col = i64::from(mapping.gen_col);
        prev_src_line = i64::from(mapping.src_line);
        prev_src_col = i64::from(mapping.src_col);
        line_has_segment = true;
    }
    out
}

const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Base64 VLQ: sign bit in the lowest position, then 5-bit groups with a
/// continuation bit.
fn encode_vlq(out: &mut String, value: i64) {
    let mut vlq = if value < 0 {
        ((-value as u64) << 1) | 1
    } else {
        (value as u64) << 1
    };
    loop {
        let mut digit = (vlq & 0b11111) as usize;
        vlq >>= 5;
        if vlq != 0 {
            digit |= 0b100000;
        }
        out.push(BASE64[digit] as char);
        if vlq == 0 {
            break;
        }
    }
}
