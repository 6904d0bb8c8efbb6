use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use time::{macros::format_description, Date};

use crate::records::err::InputError;

/// The literal answer accepted as "yes"
pub const YES: &str = "да";

/// Line-oriented prompts over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), InputError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print `prompt` and read one line without its line ending.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    /// Ask for a number until one parses.
    pub fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, InputError> {
        self.read_until_valid(prompt, parse_number::<T>)
    }

    /// Ask for a `ДД.ММ.ГГГГ` date until one parses.
    pub fn read_date(&mut self, prompt: &str) -> Result<Date, InputError> {
        self.read_until_valid(prompt, parse_date)
    }

    /// Yes/no question, only `да` counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, InputError> {
        let answer = self.read_line(prompt)?;
        Ok(answer.trim().to_lowercase() == YES)
    }

    fn read_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, InputError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() => {
                    log::debug!("rejected input: {}", e);
                    self.say("Некорректный ввод, попробуйте снова.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

pub fn parse_number<T: FromStr>(text: &str) -> Result<T, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::InvalidNumber(text.to_string()))
}

/// Parse `D.M.YYYY`, day and month may have one or two digits.
pub fn parse_date(text: &str) -> Result<Date, InputError> {
    Date::parse(
        text.trim(),
        format_description!("[day padding:none].[month padding:none].[year]"),
    )
    .map_err(|_| InputError::InvalidDate(text.to_string()))
}
