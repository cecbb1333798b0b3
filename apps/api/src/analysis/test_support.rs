//! Minimal in-memory PDF fixtures for extraction tests.

/// Builds a PDF with one page per entry; each `\n`-separated line of an entry
/// is drawn as its own text line in Helvetica. An empty entry is a blank page.
/// Lines must not contain `(`, `)` or `\`.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    // 1 catalog, 2 page tree, 3 font, then (page, content stream) pairs.
    let kids = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", pages.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (i, page) in pages.iter().enumerate() {
        let content = page_content(page);
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_start = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.extend_from_slice(xref.as_bytes());
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}

fn page_content(text: &str) -> String {
    let mut ops = String::from("BT\n/F1 12 Tf\n72 720 Td\n");
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            ops.push_str("0 -16 Td\n");
        }
        ops.push_str(&format!("({line}) Tj\n"));
    }
    ops.push_str("ET");
    ops
}
