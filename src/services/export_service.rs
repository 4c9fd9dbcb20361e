use rust_xlsxwriter::*;

use crate::error::Result;
use crate::models::quiz_attempt::{percentage, AttemptDetail};
use crate::services::grading_service::PASS_PERCENTAGE;

pub struct ExportService;

impl ExportService {
    /// File name offered in the `Content-Disposition` header.
    pub fn certificate_filename(detail: &AttemptDetail) -> String {
        let slug: String = detail
            .quiz_title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        let slug = slug
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        if slug.is_empty() {
            format!("certificate-{}.xlsx", detail.id)
        } else {
            format!("certificate-{}.xlsx", slug)
        }
    }

    /// One-sheet result certificate for a completed attempt.
    pub fn generate_certificate_xlsx(detail: &AttemptDetail) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Certificate")?;

        let primary_color = Color::RGB(0x1E293B);
        let border_color = Color::RGB(0xE2E8F0);
        let pass_color = Color::RGB(0x10B981);
        let fail_color = Color::RGB(0xEF4444);

        worksheet.set_column_width(0, 24.0)?;
        worksheet.set_column_width(1, 48.0)?;

        let title_format = Format::new()
            .set_font_size(18)
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(primary_color)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        worksheet.set_row_height(0, 42)?;
        worksheet.merge_range(0, 0, 0, 1, "Certificate of Completion", &title_format)?;

        let label_format = Format::new()
            .set_bold()
            .set_font_size(11)
            .set_font_color(primary_color)
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);
        let value_format = Format::new()
            .set_font_size(11)
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);

        let pct = percentage(detail.score, detail.total);
        let passed = detail.total > 0 && pct >= PASS_PERCENTAGE;

        let rows = [
            ("Awarded to", detail.username.clone()),
            ("Quiz", detail.quiz_title.clone()),
            ("Difficulty", detail.difficulty.clone()),
            ("Score", format!("{} / {}", detail.score, detail.total)),
            ("Percentage", format!("{:.1}%", pct)),
            (
                "Completed",
                detail.completed_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            ),
        ];

        let first_row = 2;
        for (idx, (label, value)) in rows.iter().enumerate() {
            let row = first_row + idx as u32;
            worksheet.set_row_height(row, 22)?;
            worksheet.write_string_with_format(row, 0, *label, &label_format)?;
            worksheet.write_string_with_format(row, 1, value, &value_format)?;
        }

        let result_row = first_row + rows.len() as u32;
        let result_format = Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color(Color::White)
            .set_background_color(if passed { pass_color } else { fail_color })
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);
        worksheet.set_row_height(result_row, 26)?;
        worksheet.write_string_with_format(result_row, 0, "Result", &label_format)?;
        worksheet.write_string_with_format(
            result_row,
            1,
            if passed { "PASSED" } else { "NOT PASSED" },
            &result_format,
        )?;

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }
}
