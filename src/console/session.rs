use std::io::{BufRead, Write};

use colored::Colorize;

use crate::console::prompt::TokenReader;
use crate::domain::catalog::catalog::Catalog;
use crate::domain::receipt::Receipt;
use crate::domain::reservation::reservation_service::ReservationService;
use crate::domain::seat::seat_record::SeatMap;
use crate::domain::user::user_registry::{User, UserRegistry};
use crate::error::{ReservationError, Result};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// The user chose to exit, or the input ran out.
    Completed,
    AuthenticationFailed,
    /// A movie or time slot choice was out of range.
    InvalidChoice,
}

impl SessionExit {
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionExit::Completed => 0,
            SessionExit::AuthenticationFailed | SessionExit::InvalidChoice => 1,
        }
    }
}

/// Box-office console: login, then book seats until the user leaves.
pub struct ConsoleSession<'a, R, W> {
    input: TokenReader<R>,
    output: W,
    service: &'a ReservationService,
    catalog: &'a Catalog,
    users: &'a UserRegistry,
    palette: Palette,
}

impl<'a, R: BufRead, W: Write> ConsoleSession<'a, R, W> {
    pub fn new(input: R, output: W, service: &'a ReservationService, catalog: &'a Catalog, users: &'a UserRegistry) -> Self {
        Self { input: TokenReader::new(input), output, service, catalog, users, palette: Palette { color: false } }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.palette.color = color;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<SessionExit> {
        let Some(user) = self.login()? else {
            writeln!(self.output, "{}", self.palette.failure("Authentication failed. Invalid username or password."))?;
            return Ok(SessionExit::AuthenticationFailed);
        };
        writeln!(self.output, "{}", self.palette.success(&format!("Authentication successful! Welcome, {}.", user.username)))?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", self.palette.heading("MAIN MENU"))?;
            writeln!(self.output, "1. Select Movie List")?;
            writeln!(self.output, "2. Exit Program")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(SessionExit::Completed);
            };

            match choice.parse::<i64>() {
                Ok(1) => {
                    if let Some(exit) = self.book(&user)? {
                        return Ok(exit);
                    }
                }
                Ok(2) => {
                    writeln!(self.output, "Exiting the program. Goodbye!")?;
                    return Ok(SessionExit::Completed);
                }
                _ => {
                    self.input.discard_line();
                    writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                }
            }
        }
    }

    fn login(&mut self) -> Result<Option<User>> {
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(None);
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(None);
        };

        Ok(self.users.authenticate(&username, &password).cloned())
    }

    /// One pass through movie, time slot and seat selection.
    ///
    /// # Returns
    /// Returns `Some` if the session has to end.
    fn book(&mut self, user: &User) -> Result<Option<SessionExit>> {
        self.print_movie_list()?;
        let Some(choice) = self.prompt("Enter the number corresponding to the movie you want to watch: ")? else {
            return Ok(Some(SessionExit::Completed));
        };
        let Some(movie) = choice.parse::<usize>().ok().and_then(|n| self.catalog.movie(n)).cloned() else {
            writeln!(self.output, "{}", self.palette.failure("Invalid choice. Exiting the program."))?;
            return Ok(Some(SessionExit::InvalidChoice));
        };

        self.print_time_slots()?;
        let Some(choice) = self.prompt("Enter the number corresponding to the time slot you prefer: ")? else {
            return Ok(Some(SessionExit::Completed));
        };
        let Some(time_slot) = choice.parse::<usize>().ok().and_then(|n| self.catalog.time_slot(n)).cloned() else {
            writeln!(self.output, "{}", self.palette.failure("Invalid choice. Exiting the program."))?;
            return Ok(Some(SessionExit::InvalidChoice));
        };

        let Some(count) = self.prompt("Enter the number of seats you want to reserve: ")? else {
            return Ok(Some(SessionExit::Completed));
        };
        let count = match count.parse::<u32>() {
            Ok(count) if count > 0 => count,
            _ => {
                self.input.discard_line();
                writeln!(self.output, "{}", self.palette.failure("Invalid input. Please enter a valid number of seats."))?;
                return Ok(None);
            }
        };

        writeln!(self.output)?;
        writeln!(self.output, "{}", self.palette.heading(&format!("SEAT RESERVATION FOR {}", movie.name)))?;
        let seats = self.service.display_seats();
        writeln!(self.output, "{}", self.palette.seats(&seats))?;

        match self.service.reserve_seats(&movie.name, count) {
            Ok(outcome) => {
                writeln!(self.output, "{}", self.palette.success("Seats reserved successfully."))?;
                let seats = self.service.display_seats();
                writeln!(self.output, "{}", self.palette.seats(&seats))?;

                let receipt = Receipt::new(user, &movie, &time_slot, &outcome);
                writeln!(self.output)?;
                writeln!(self.output, "{}", receipt)?;
            }
            Err(ReservationError::InsufficientSeats { .. }) => {
                writeln!(self.output, "{}", self.palette.failure("Not enough available seats. Reservation failed."))?;
            }
            Err(e) => {
                writeln!(self.output, "{}", self.palette.failure(&format!("Reservation failed: {}", e)))?;
            }
        }

        Ok(None)
    }

    fn print_movie_list(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.palette.heading("MOVIE LIST"))?;
        for (index, movie) in self.catalog.movies().iter().enumerate() {
            writeln!(self.output, "{}. {} - {}", index + 1, movie.name, movie.price)?;
        }
        Ok(())
    }

    fn print_time_slots(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.palette.heading("TIME SLOTS"))?;
        for (index, slot) in self.catalog.time_slots().iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, slot)?;
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(self.input.next_token()?)
    }
}

/// Optional terminal colouring of console output.
#[derive(Debug, Clone, Copy)]
struct Palette {
    color: bool,
}

impl Palette {
    fn seats(&self, seats: &SeatMap) -> String {
        if !self.color {
            return seats.to_string();
        }

        let mut line = String::from("Seats:");
        for seat in seats.seats() {
            let marker = seat.marker().to_string();
            let marker = if seat.reserved { marker.red() } else { marker.green() };
            line.push_str(&format!(" {}", marker));
        }
        line
    }

    fn heading(&self, text: &str) -> String {
        if self.color { text.bold().to_string() } else { text.to_string() }
    }

    fn success(&self, text: &str) -> String {
        if self.color { text.green().to_string() } else { text.to_string() }
    }

    fn failure(&self, text: &str) -> String {
        if self.color { text.red().to_string() } else { text.to_string() }
    }
}
