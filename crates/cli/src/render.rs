//! Plain-text table output

use tasktrack_core::task::Task;

const HEADERS: [&str; 5] = ["Task ID", "Title", "Description", "Due Date", "Status"];

/// Render tasks as a bordered table, one row per task
pub fn task_table<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let rows: Vec<[String; 5]> = tasks
        .into_iter()
        .map(|t| {
            [
                t.id.to_string(),
                t.title.clone(),
                t.description.clone(),
                t.due_date.to_string(),
                t.status.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let rule = rule(&widths);
    out.push_str(&rule);
    push_row(&mut out, &widths, HEADERS);
    out.push_str(&rule);
    for row in &rows {
        push_row(&mut out, &widths, row.iter().map(String::as_str));
    }
    if !rows.is_empty() {
        out.push_str(&rule);
    }
    out
}

fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn push_row<'a>(out: &mut String, widths: &[usize], cells: impl IntoIterator<Item = &'a str>) {
    out.push('|');
    for (cell, &width) in cells.into_iter().zip(widths) {
        out.push_str(&format!(" {cell:<width$} |"));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tasktrack_core::task::TaskStatus;

    #[test]
    fn test_empty_table_has_header_only() {
        let table = task_table(&Vec::<Task>::new());
        assert_eq!(
            table,
            "+---------+-------+-------------+----------+--------+\n\
             | Task ID | Title | Description | Due Date | Status |\n\
             +---------+-------+-------------+----------+--------+\n"
        );
    }

    #[test]
    fn test_columns_grow_to_widest_cell() {
        let tasks = [
            Task::new(1, "Buy milk", "2%", NaiveDate::from_ymd_opt(2030, 1, 2).unwrap()),
            Task::new(12, "Pay rent", "monthly bills", NaiveDate::from_ymd_opt(2030, 2, 1).unwrap())
                .with_status(TaskStatus::Completed),
        ];

        let table = task_table(&tasks);
        assert_eq!(
            table,
            "+---------+----------+---------------+------------+-----------+\n\
             | Task ID | Title    | Description   | Due Date   | Status    |\n\
             +---------+----------+---------------+------------+-----------+\n\
             | 1       | Buy milk | 2%            | 2030-01-02 | Pending   |\n\
             | 12      | Pay rent | monthly bills | 2030-02-01 | Completed |\n\
             +---------+----------+---------------+------------+-----------+\n"
        );
    }
}
