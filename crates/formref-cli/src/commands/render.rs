//! Plain-text rendering of records and resolution results.

use std::fmt::Write;

use formref::{FormId, FormReference, ResultCode};

const BYTES_PER_LINE: usize = 16;

/// `hexdump -C` style dump; repeated lines collapse to `*`.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut prev: Option<&[u8]> = None;
    let mut collapsed = false;

    for (line, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        if chunk.len() == BYTES_PER_LINE && prev == Some(chunk) {
            if !collapsed {
                out.push_str("*\n");
                collapsed = true;
            }
            continue;
        }
        collapsed = false;
        prev = Some(chunk);

        write!(out, "{:08x} ", line * BYTES_PER_LINE).unwrap();
        for i in 0..BYTES_PER_LINE {
            if i == BYTES_PER_LINE / 2 {
                out.push(' ');
            }
            match chunk.get(i) {
                Some(b) => write!(out, " {b:02x}").unwrap(),
                None => out.push_str("   "),
            }
        }
        out.push_str("  |");
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        out.push_str("|\n");
    }

    writeln!(out, "{:08x}", bytes.len()).unwrap();
    out
}

pub fn describe_reference(reference: &FormReference) -> String {
    let name = reference.package_name();
    let name = if name.is_empty() { "(none)" } else { name.as_str() };
    format!(
        "package: {name}\nlocal:   0x{:06X}\n",
        reference.local_index().as_u32()
    )
}

pub fn describe_resolution(code: ResultCode, id: u32) -> String {
    format!("result:  {code:?} ({})\nform id: {}\n", code.as_u32(), FormId(id))
}
