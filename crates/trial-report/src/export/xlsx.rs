use super::TabularExporter;
use crate::{Cell, Error, Result, TabularRecord};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// Office Open XML workbook with a single worksheet
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    sheet_name: String,
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self {
            sheet_name: "Results".to_string(),
        }
    }
}

impl XlsxExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the worksheet tab
    ///
    /// Excel limits sheet names to 31 characters and forbids `[]:*?/\`.
    pub fn with_sheet_name(mut self, name: &str) -> Result<Self> {
        let invalid = name.trim().is_empty()
            || name.chars().count() > 31
            || name.contains(['[', ']', ':', '*', '?', '/', '\\']);
        if invalid {
            return Err(Error::InvalidInput(format!("invalid sheet name: {name:?}")));
        }
        self.sheet_name = name.to_string();
        Ok(self)
    }

    fn workbook_xml(&self) -> Result<Vec<u8>> {
        let mut writer = xml_writer()?;

        let mut root = BytesStart::new("workbook");
        root.push_attribute(("xmlns", SPREADSHEET_NS));
        root.push_attribute((
            "xmlns:r",
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
        ));
        write_event(&mut writer, Event::Start(root))?;
        write_event(&mut writer, Event::Start(BytesStart::new("sheets")))?;

        let mut sheet = BytesStart::new("sheet");
        sheet.push_attribute(("name", self.sheet_name.as_str()));
        sheet.push_attribute(("sheetId", "1"));
        sheet.push_attribute(("r:id", "rId1"));
        write_event(&mut writer, Event::Empty(sheet))?;

        write_event(&mut writer, Event::End(BytesEnd::new("sheets")))?;
        write_event(&mut writer, Event::End(BytesEnd::new("workbook")))?;

        Ok(writer.into_inner().into_inner())
    }
}

impl TabularExporter for XlsxExporter {
    fn file_extension(&self) -> &'static str {
        "xlsx"
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    fn export(&self, record: &TabularRecord) -> Result<Vec<u8>> {
        if record.is_empty() {
            return Err(Error::InvalidInput("record has no columns".to_string()));
        }

        let header: Vec<Cell> = record.headers().map(Cell::text).collect();
        let data: Vec<Cell> = record.cells().cloned().collect();
        let sheet = worksheet_xml(&[header, data])?;
        let workbook = self.workbook_xml()?;

        let parts: [(&str, &[u8]); 5] = [
            ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
            ("_rels/.rels", ROOT_RELS.as_bytes()),
            ("xl/workbook.xml", &workbook),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.as_bytes()),
            ("xl/worksheets/sheet1.xml", &sheet),
        ];

        // Fixed timestamp keeps the output byte-for-byte reproducible
        let fixed_time = DateTime::from_date_and_time(1980, 1, 1, 0, 0, 0)
            .map_err(|_| Error::InvalidInput("failed to build fixed timestamp".to_string()))?;
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(fixed_time);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, bytes) in parts {
            zip.start_file(name, options)?;
            zip.write_all(bytes)?;
        }
        Ok(zip.finish()?.into_inner())
    }
}

/// In-memory writer with the XML declaration already written
fn xml_writer() -> Result<Writer<Cursor<Vec<u8>>>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let declaration = BytesDecl::new("1.0", Some("UTF-8"), Some("yes"));
    write_event(&mut writer, Event::Decl(declaration))?;
    Ok(writer)
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(e.to_string()))
}

/// A1-style column letters for a zero-based index
fn column_name(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

fn worksheet_xml(rows: &[Vec<Cell>]) -> Result<Vec<u8>> {
    let mut writer = xml_writer()?;

    let mut root = BytesStart::new("worksheet");
    root.push_attribute(("xmlns", SPREADSHEET_NS));
    write_event(&mut writer, Event::Start(root))?;
    write_event(&mut writer, Event::Start(BytesStart::new("sheetData")))?;

    for (row_index, row) in rows.iter().enumerate() {
        let row_number = (row_index + 1).to_string();
        let mut row_start = BytesStart::new("row");
        row_start.push_attribute(("r", row_number.as_str()));
        write_event(&mut writer, Event::Start(row_start))?;

        for (column_index, cell) in row.iter().enumerate() {
            if *cell == Cell::Empty {
                continue;
            }
            let reference = format!("{}{}", column_name(column_index), row_number);
            let text = cell.to_string();

            let mut cell_start = BytesStart::new("c");
            cell_start.push_attribute(("r", reference.as_str()));
            if cell.is_numeric() {
                write_event(&mut writer, Event::Start(cell_start))?;
                write_event(&mut writer, Event::Start(BytesStart::new("v")))?;
                write_event(&mut writer, Event::Text(BytesText::new(&text)))?;
                write_event(&mut writer, Event::End(BytesEnd::new("v")))?;
            } else {
                cell_start.push_attribute(("t", "inlineStr"));
                write_event(&mut writer, Event::Start(cell_start))?;
                write_event(&mut writer, Event::Start(BytesStart::new("is")))?;
                write_event(&mut writer, Event::Start(BytesStart::new("t")))?;
                write_event(&mut writer, Event::Text(BytesText::new(&text)))?;
                write_event(&mut writer, Event::End(BytesEnd::new("t")))?;
                write_event(&mut writer, Event::End(BytesEnd::new("is")))?;
            }
            write_event(&mut writer, Event::End(BytesEnd::new("c")))?;
        }

        write_event(&mut writer, Event::End(BytesEnd::new("row")))?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("sheetData")))?;
    write_event(&mut writer, Event::End(BytesEnd::new("worksheet")))?;

    Ok(writer.into_inner().into_inner())
}
