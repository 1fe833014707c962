//! Example: append a totals row and keep a table range in step

use a1_sheets::prelude::*;
use a1_sheets::BatchResult;

fn main() -> BatchResult<()> {
    let mut sheet = SheetHandle::new("abc123", 0, "Sales", 5, 3);
    let session = StaticSession::new("example-token");
    let mut transport = RecordingTransport::new();

    let mut batch = sheet.batch();
    let table = batch.track("Sales!A1:C5".parse()?);

    // Room for a header above the data and a totals row below it
    batch
        .insert_dimension(Dimension::Rows, 1, 1, false)?
        .expand_dimensions(1, Dimension::Rows)?
        .set_values(
            "A1:C1".parse()?,
            Dimension::Rows,
            vec![vec!["Region".into(), "Units".into(), "Revenue".into()]],
        )?
        .set_values(
            "A7:C7".parse()?,
            Dimension::Rows,
            vec![vec!["Total".into(), "=SUM(B2:B6)".into(), "=SUM(C2:C6)".into()]],
        )?;

    if let Some(range) = batch.tracked(table) {
        println!("Table now spans {}", range);
    }

    let response = batch.execute(&session, &mut transport)?;
    println!("{} replies", response.replies.len());

    if let Some(request) = transport.last_request() {
        println!("{}", request.to_json_pretty()?);
    }

    drop(batch);
    println!("Sheet is now {}x{}", sheet.row_count, sheet.column_count);
    Ok(())
}
