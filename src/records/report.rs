//! Console rendering of repository query results.

use std::io::{self, Write};

use time::{macros::format_description, Date};

use super::student::Student;

const RULE: &str = "---------------------";

pub fn write_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return writeln!(out, "Список студентов пуст.");
    }

    writeln!(out, "Список студентов:")?;
    writeln!(out, "{}", RULE)?;
    for student in students {
        writeln!(
            out,
            "ID: {}, Имя: {}, Email: {}",
            student.id, student.name, student.email
        )?;
    }
    Ok(())
}

pub fn write_attendance<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    if student.attendance.is_empty() {
        return writeln!(out, "Записей о посещении нет.");
    }

    writeln!(out, "Записи о посещении для студента {}:", student.name)?;
    writeln!(out, "{}", RULE)?;
    for record in &student.attendance {
        writeln!(
            out,
            "Дата: {}, Присутствие: {}",
            format_date(record.date).map_err(io::Error::other)?,
            if record.is_present { "да" } else { "нет" }
        )?;
    }
    Ok(())
}

pub fn write_grades<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(out, "Оценки студента {}:", student.name)?;
    writeln!(out, "{}", RULE)?;
    for (subject, grades) in student.grades.iter() {
        let joined: Vec<String> = grades.iter().map(|g| g.to_string()).collect();
        writeln!(out, "{}: {}", subject, joined.join(", "))?;
    }
    writeln!(out, "Средняя оценка: {:.2}", student.average_grade())
}

/// `DD.MM.YYYY`, the shape the date prompt asks for
pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(format_description!("[day].[month].[year]"))
}
