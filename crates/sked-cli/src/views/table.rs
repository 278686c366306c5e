use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use sked_core::models::{format_date, Task};

pub fn display_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks scheduled.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Due", "Title", "Comment", "Repeat"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));

        let mut due_cell = Cell::new(format_date(task.date));
        if task.date < today {
            due_cell = due_cell.fg(Color::Red).add_attribute(Attribute::Bold);
        } else if task.date == today {
            due_cell = due_cell.fg(Color::Yellow);
        }
        row.add_cell(due_cell);

        let mut display_title = String::new();
        if task.repeat.is_some() {
            display_title.push('↻');
            display_title.push(' ');
        }
        display_title.push_str(&task.title);
        row.add_cell(Cell::new(display_title));

        row.add_cell(Cell::new(&task.comment));
        row.add_cell(Cell::new(
            task.repeat.map(|r| r.to_string()).unwrap_or_default(),
        ));

        table.add_row(row);
    }

    println!("{table}");
}
