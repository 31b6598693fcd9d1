use airport_stats::components::prelude::*;
use airport_stats::AirportError;
use log::debug;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
Airport statistics
 1) List airports
 2) Show an airport
 3) Check whether an airport exists
 4) Distance between two airports
 5) Distance statistics for all airports
 6) Distance statistics for one country
 7) Airport density of a country
 0) Quit";

/// The interactive console menu over a loaded database.
pub struct Menu<'a> {
    database: &'a AirportDatabase,
    countries: Option<&'a Countries>,
    /// Built on first use, since it is quadratic in the number of airports
    distances: Option<AirportDistanceMap>,
}

impl<'a> Menu<'a> {
    pub const fn new(database: &'a AirportDatabase, countries: Option<&'a Countries>) -> Self {
        Self {
            database,
            countries,
            distances: None,
        }
    }

    /// Runs until the user quits or the input ends.
    /// # Errors
    /// Only if reading the input or writing the output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            writeln!(output, "{}", MENU)?;
            let choice = match prompt(&mut input, &mut output, "> ")? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            debug!("Menu choice {:?}", choice);
            let result = match choice.as_str() {
                "1" => self.list_airports(&mut output),
                "2" => self.show_airport(&mut input, &mut output),
                "3" => self.check_airport(&mut input, &mut output),
                "4" => self.distance(&mut input, &mut output),
                "5" => self.all_statistics(&mut output),
                "6" => self.country_statistics(&mut input, &mut output),
                "7" => self.density(&mut input, &mut output),
                "0" | "q" => return Ok(()),
                _ => {
                    writeln!(output, "Unknown option {}", choice)?;
                    Ok(())
                }
            };
            match result {
                Ok(()) => {}
                Err(AirportError::IOError(e)) => return Err(e),
                Err(e) => writeln!(output, "Error: {}", e)?,
            }
        }
    }

    fn list_airports<W: Write>(&self, output: &mut W) -> Result<(), AirportError> {
        let mut airports = self.database.airports().collect::<Vec<_>>();
        airports.sort_by_key(|a| a.airport_id);
        for airport in airports {
            writeln!(output, "{}", airport)?;
        }
        writeln!(output, "{} airports", self.database.len())?;
        Ok(())
    }

    fn show_airport<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), AirportError> {
        if let Some(id) = prompt(input, output, "Airport id: ")? {
            let airport = self.database.get_by_id(id.parse::<AirportId>()?)?;
            writeln!(output, "{}", airport)?;
        }
        Ok(())
    }

    fn check_airport<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), AirportError> {
        if let Some(id) = prompt(input, output, "Airport id: ")? {
            let id = id.parse::<AirportId>()?;
            if self.database.contains(id) {
                writeln!(output, "Airport {} exists", id)?;
            } else {
                writeln!(output, "Airport {} does not exist", id)?;
            }
        }
        Ok(())
    }

    fn distance<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), AirportError> {
        let from = match prompt(input, output, "From airport id: ")? {
            Some(id) => id.parse::<AirportId>()?,
            None => return Ok(()),
        };
        let to = match prompt(input, output, "To airport id: ")? {
            Some(id) => id.parse::<AirportId>()?,
            None => return Ok(()),
        };
        let distance = self.distance_map().distance_between(from, to)?;
        writeln!(output, "Distance from {} to {}: {:.4}", from, to, distance.0)?;
        Ok(())
    }

    fn all_statistics<W: Write>(&mut self, output: &mut W) -> Result<(), AirportError> {
        let map = self.distance_map();
        let summary = map.summary()?;
        writeln!(output, "{} airports, {} pairs", map.airport_count(), map.len())?;
        writeln!(output, "{}", summary)?;
        Ok(())
    }

    fn country_statistics<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), AirportError> {
        if let Some(country) = prompt(input, output, "Country: ")? {
            let subset = self.database.subset(&InCountry::new(country.clone()));
            writeln!(output, "{} airports in {}", subset.len(), country)?;
            let summary = subset.distance_map().summary()?;
            writeln!(output, "{}", summary)?;
        }
        Ok(())
    }

    fn density<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), AirportError> {
        let countries = match self.countries {
            Some(countries) => countries,
            None => {
                writeln!(output, "No countries file was loaded")?;
                return Ok(());
            }
        };
        if let Some(name) = prompt(input, output, "Country: ")? {
            let country = countries.get(&name)?;
            writeln!(
                output,
                "Airports per inhabitant: {:e}",
                self.database.density_in(country, Country::population)
            )?;
            writeln!(
                output,
                "Airports per square kilometre: {:e}",
                self.database.density_in(country, Country::area)
            )?;
        }
        Ok(())
    }

    fn distance_map(&mut self) -> &AirportDistanceMap {
        let database = self.database;
        self.distances.get_or_insert_with(|| database.distance_map())
    }
}

/// Writes the prompt and reads one trimmed line. `None` if the input has ended.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

#[allow(clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    fn database() -> AirportDatabase {
        AirportDatabase::from_file(Path::new("./test/airports.dat"), false, b',')
            .expect("Failed to read airports.dat")
    }

    fn run_menu(database: &AirportDatabase, countries: Option<&Countries>, input: &str) -> String {
        let mut output = Vec::new();
        Menu::new(database, countries)
            .run(Cursor::new(input), &mut output)
            .expect("Menu failed");
        String::from_utf8(output).expect("Output is not UTF-8")
    }

    #[test]
    fn it_lists_airports_in_id_order() {
        let database = database();
        let output = run_menu(&database, None, "1\n0\n");
        let heathrow = output.find("1: Heathrow Airport").expect("Heathrow not listed");
        let sydney = output
            .find("8: Sydney Kingsford Smith International Airport")
            .expect("Sydney not listed");
        assert!(heathrow < sydney);
        assert!(output.contains("8 airports"));
    }

    #[test]
    fn it_reports_errors_and_keeps_running() {
        let database = database();
        let output = run_menu(&database, None, "2\n99\n2\nabc\n3\n4\n9\n");
        assert!(output.contains("Error: airport 99 not found"));
        assert!(output.contains("Error: invalid airport id"));
        assert!(output.contains("Airport 4 exists"));
        assert!(output.contains("Unknown option 9"));
    }

    #[test]
    fn it_computes_distances_and_statistics() {
        let database = database();
        let output = run_menu(&database, None, "4\n4\n5\n5\n6\nUnited Kingdom\n6\nAustralia\nq\n");
        assert!(output.contains("Distance from 4 to 5:"));
        assert!(output.contains("8 airports, 28 pairs"));
        assert!(output.contains("Pairs:              28"));
        assert!(output.contains("3 airports in United Kingdom"));
        assert!(output.contains("Pairs:              3"));
        assert!(output.contains("1 airports in Australia"));
        assert!(output.contains("Error: the distance map is empty"));
    }

    #[test]
    fn it_computes_densities_when_countries_are_loaded() {
        let database = database();
        let output = run_menu(&database, None, "7\n");
        assert!(output.contains("No countries file was loaded"));

        let countries =
            Countries::from_file(Path::new("./test/countries.csv")).expect("Failed to read");
        let output = run_menu(&database, Some(&countries), "7\nFrance\n7\nAtlantis\n");
        assert!(output.contains("Airports per inhabitant:"));
        assert!(output.contains("Airports per square kilometre:"));
        assert!(output.contains("Error: country Atlantis not found"));
    }

    #[test]
    fn it_builds_filters_from_outside_the_library() {
        let database = database();
        let europe = And::new(
            Not::new(InCountry::new("United States".to_owned())),
            Not::new(InCountry::new("Australia".to_owned())),
        );
        assert_eq!(database.subset(&europe).len(), 5);
        assert_eq!(database.subset(&All).len(), 8);
    }

    #[test]
    fn it_stops_at_the_end_of_input() {
        let database = AirportDatabase::default();
        let output = run_menu(&database, None, "");
        assert!(output.ends_with("> "));
    }
}
