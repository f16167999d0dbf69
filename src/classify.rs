use crate::model::TourismRecord;
use crate::numeric::extract_number;

const ESTABLISHMENTS_COLUMN: usize = 1;
const GROSS_SALES_COLUMN: usize = 2;
const TAX_COLUMN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndustryCategory {
    Accommodation,
    FoodServices,
    Recreation,
    Museums,
    LeisureHospitalityTotal,
}

// Order is load-bearing: the first matching rule wins.
const INDUSTRY_RULES: &[(&str, IndustryCategory)] = &[
    ("721 accommodation", IndustryCategory::Accommodation),
    ("722 food services", IndustryCategory::FoodServices),
    ("713 amusement", IndustryCategory::Recreation),
    ("712 museums", IndustryCategory::Museums),
    (
        "leisure and hospitality total",
        IndustryCategory::LeisureHospitalityTotal,
    ),
];

pub(crate) fn classify_industry(first_cell: &str) -> Option<IndustryCategory> {
    let industry = first_cell.trim().to_lowercase();
    INDUSTRY_RULES
        .iter()
        .find(|(needle, _)| industry.contains(needle))
        .map(|(_, category)| *category)
}

fn cell_number(row: &[String], column: usize) -> Option<f64> {
    row.get(column).and_then(|cell| extract_number(cell))
}

pub(crate) fn apply_industry_row(
    record: &mut TourismRecord,
    category: IndustryCategory,
    row: &[String],
) {
    let establishments = cell_number(row, ESTABLISHMENTS_COLUMN);
    let gross_sales = cell_number(row, GROSS_SALES_COLUMN);

    match category {
        IndustryCategory::Accommodation => {
            record.accommodation_establishments = establishments;
            record.accommodation_gross_sales = gross_sales;
        }
        IndustryCategory::FoodServices => {
            record.food_service_establishments = establishments;
            record.food_service_gross_sales = gross_sales;
        }
        IndustryCategory::Recreation => {
            record.recreation_establishments = establishments;
            record.recreation_gross_sales = gross_sales;
        }
        IndustryCategory::Museums => {
            record.museums_establishments = establishments;
            record.museums_gross_sales = gross_sales;
        }
        IndustryCategory::LeisureHospitalityTotal => {
            record.total_leisure_hospitality_establishments = establishments;
            record.total_leisure_hospitality_gross_sales = gross_sales;
            record.total_leisure_hospitality_tax = cell_number(row, TAX_COLUMN);
        }
    }
}
