//! Fixed-width text rendering of programs and timings.
//!
//! Pure formatting: every function returns the text and leaves printing to
//! the caller.

use numanal_core::{Program, Timing};

const NAME_WIDTH: usize = 20;
const DESCRIPTION_WIDTH: usize = 30;
const PREFIX_WIDTH: usize = 20;

/// Numbered table of programs, ordinals starting at 1.
pub fn program_table(programs: &[Program]) -> String {
    let mut lines = vec![
        "\t\tPrograms in database".to_string(),
        String::new(),
        format!(
            "    {:<nw$} {:<dw$} {}",
            "Name",
            "Description",
            "Command line prefix",
            nw = NAME_WIDTH,
            dw = DESCRIPTION_WIDTH
        ),
        format!(
            "    {} {} {}",
            "-".repeat(NAME_WIDTH),
            "-".repeat(DESCRIPTION_WIDTH),
            "-".repeat(PREFIX_WIDTH)
        ),
    ];
    for (index, program) in programs.iter().enumerate() {
        lines.push(format!(
            "{:>2}) {:<nw$} {:<dw$} {}",
            index + 1,
            program.name,
            program.description,
            program.command_line_prefix,
            nw = NAME_WIDTH,
            dw = DESCRIPTION_WIDTH
        ));
    }
    lines.join("\n")
}

/// All fields of one program, one per line.
pub fn program_details(program: &Program) -> String {
    format!(
        "Program : {}\nDescription : {}\nCommand line prefix : {}",
        program.name, program.description, program.command_line_prefix
    )
}

/// Two-column table of a program's timings.
pub fn timing_table(name: &str, timings: &[Timing]) -> String {
    let mut lines = vec![
        format!("     \"{}\" timings in database", name),
        String::new(),
        "  Problem size   Timing".to_string(),
        "  ------------   ---------------".to_string(),
    ];
    for timing in timings {
        lines.push(format!(
            "  {:<12}   {:>15}",
            timing.problem_size,
            format_seconds(timing.time)
        ));
    }
    lines.join("\n")
}

/// Seconds with microsecond resolution.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.6}", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_rows_are_fixed_width() {
        let programs = vec![
            Program::new("l2norm", "L2 vector norm", "l2vecnorm"),
            Program::new("linear", "synthetic O(n)", "linear_timing"),
        ];
        let table = program_table(&programs);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "\t\tPrograms in database");

        let row = lines[4];
        assert_eq!(&row[..4], " 1) ");
        assert_eq!(row[4..24].trim_end(), "l2norm");
        assert_eq!(row[25..55].trim_end(), "L2 vector norm");
        assert_eq!(&row[56..], "l2vecnorm");
        assert!(lines[5].starts_with(" 2) linear"));

        // Header columns line up with the rows.
        assert_eq!(&lines[2][4..8], "Name");
        assert_eq!(&lines[2][25..36], "Description");
        assert_eq!(&lines[2][56..], "Command line prefix");
    }

    #[test]
    fn empty_program_table_has_header_only() {
        assert_eq!(program_table(&[]).lines().count(), 4);
    }

    #[test]
    fn timing_rows() {
        let table = timing_table(
            "l2norm",
            &[Timing::new(1000, 0.001), Timing::new(5000, 0.006)],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "     \"l2norm\" timings in database");
        assert_eq!(lines[4], "  1000                  0.001000");
        assert_eq!(lines[5], "  5000                  0.006000");
    }

    #[test]
    fn details_list_every_field() {
        let details = program_details(&Program::new("a", "b", "c"));
        assert_eq!(details, "Program : a\nDescription : b\nCommand line prefix : c");
    }

    #[test]
    fn seconds_have_six_decimals() {
        assert_eq!(format_seconds(0.004512), "0.004512");
        assert_eq!(format_seconds(2.0), "2.000000");
    }
}
