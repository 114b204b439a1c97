use crate::calc::{generate_for_token, BoundaryPolicy};
use crate::data::{Field, LabelLayout, ScheduleRow};
use anyhow::Result;

pub fn run(token: &str, policy: BoundaryPolicy, layout: LabelLayout) -> Result<()> {
    let rows = generate_for_token(token, policy, layout);
    write_slots(&rows, policy, layout, &mut std::io::stdout())
}

pub(crate) fn write_slots<W: std::io::Write>(
    rows: &[ScheduleRow],
    policy: BoundaryPolicy,
    layout: LabelLayout,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Time slots ({policy:?})")?;
    writeln!(out, "---")?;
    for (i, row) in rows.iter().enumerate() {
        match layout {
            LabelLayout::Single => {
                writeln!(out, "  {:>3}  {}", i + 1, row.get(Field::Time).unwrap_or_default())?
            }
            LabelLayout::Paired => writeln!(
                out,
                "  {:>3}  {:<10} - {}",
                i + 1,
                row.get(Field::Start).unwrap_or_default(),
                row.get(Field::End).unwrap_or_default()
            )?,
        }
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} slot(s)", rows.len())?;
    Ok(())
}
