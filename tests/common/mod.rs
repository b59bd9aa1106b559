//! Helpers for building docx fixtures in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A paragraph with one run per string.
pub fn paragraph(runs: &[&str]) -> String {
    let runs: String = runs
        .iter()
        .map(|text| format!(r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#, text))
        .collect();
    format!("<w:p>{}</w:p>", runs)
}

/// A table whose cells each hold one single-run paragraph.
pub fn table(rows: &[&[&str]]) -> String {
    let rows: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<w:tc>{}</w:tc>", paragraph(&[cell])))
                .collect();
            format!("<w:tr>{}</w:tr>", cells)
        })
        .collect();
    format!("<w:tbl>{}</w:tbl>", rows)
}

/// `word/document.xml` with the given body content.
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        WML_NS, body
    )
}

/// A zip archive with the given entries.
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// A minimal docx package around a body.
pub fn docx_bytes(body: &str) -> Vec<u8> {
    let content_types = br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#;
    let xml = document_xml(body);
    zip_bytes(&[
        ("[Content_Types].xml", &content_types[..]),
        ("word/document.xml", xml.as_bytes()),
    ])
}

/// A typical registration form as one table.
pub fn registration_form(name: &str, student_id: &str, accepts: &str) -> String {
    let intro = paragraph(&["学生会干部竞选报名表"]);
    let id_cell = format!("学号：{}", student_id);
    let form = table(&[
        &["姓名", name, "性别", "女", "出生年月", "2004.05"],
        &["政治面貌", "共青团员", "所在分院", "信息学院", "班级", "计科2201"],
        &[id_cell.as_str(), "", "联系方式", "13800000000", "微信", "wx_form"],
        &["第一志愿", "学习部", "第二志愿", "宣传部", "服从分配", accepts],
        &["个人优势分析及简要工作设想"],
        &["善于沟通，做事细致"],
    ]);
    format!("{}{}", intro, form)
}
