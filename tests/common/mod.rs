use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

pub fn create_report_pdf(
    path: &Path,
    pages: &[Vec<String>],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut page_ids = Vec::new();

    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
            Operation::new("TL", vec![14.into()]),
            Operation::new("Td", vec![40.into(), 780.into()]),
        ];

        for (index, line) in lines.iter().enumerate() {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(line.as_str())],
            ));
            if index + 1 < lines.len() {
                operations.push(Operation::new("T*", vec![]));
            }
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| (*id).into()).collect::<Vec<_>>(),
            "Count" => i64::try_from(page_ids.len())?,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    doc.save(path)?;
    Ok(())
}

pub fn county_report_page(year: i32) -> Vec<String> {
    vec![
        format!("Minnesota sales and use tax statistics for calendar year {year}."),
        String::new(),
        "St. Louis County  Sales and Use Tax Annual Report".to_string(),
        "Industry  Number of Businesses  Gross Sales  Taxable Sales  Sales Tax  Total Tax"
            .to_string(),
        "721 Accommodation  142  $88,067,350  $80,123,410  $5,608,639  $5,731,220".to_string(),
        "722 Food Services and Drinking Places  511  $301,554,802  $268,112,950  $18,767,906  $19,101,387"
            .to_string(),
        "713 Amusement, Gambling and Recreation  87  $45,210,668  $39,870,114  $2,790,908  $2,845,120"
            .to_string(),
        "712 Museums, Historical Sites  19  $6,804,219  $5,912,400  $413,868  $421,509".to_string(),
        "Leisure and Hospitality Total  759  $441,637,039  $394,018,874  $27,581,321  $28,099,236"
            .to_string(),
    ]
}

pub fn other_county_page(year: i32) -> Vec<String> {
    vec![
        format!("Minnesota sales and use tax statistics for calendar year {year}."),
        String::new(),
        "Hennepin County  Sales and Use Tax Annual Report".to_string(),
        "Industry  Number of Businesses  Gross Sales".to_string(),
        "721 Accommodation  300  $120,000,000".to_string(),
        "722 Food Services and Drinking Places  900  $410,000,000".to_string(),
    ]
}
