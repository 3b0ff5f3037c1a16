use std::io::{self, BufRead, Write};

use log::debug;

use crate::extractors::extract_ingredients;
use crate::model::Recipe;
use crate::providers::ModelClient;
use crate::search::{search_recipes, DEFAULT_TOP_N};

/// Interactive menu over any line-oriented input and text output.
///
/// `main` runs it on stdin/stdout; tests drive it with in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    client: Option<Box<dyn ModelClient>>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, client: Option<Box<dyn ModelClient>>) -> Self {
        Console {
            input,
            output,
            client,
        }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        if self.is_configured() {
            writeln!(
                self.output,
                "Model client configured. Using remote model for extraction when available."
            )?;
        } else {
            writeln!(
                self.output,
                "No remote model configured, running in local fallback mode."
            )?;
        }

        loop {
            writeln!(self.output)?;
            self.show_menu()?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                writeln!(self.output)?;
                break;
            };

            match choice.trim() {
                "1" => self.handle_search()?,
                "2" => self.handle_extract()?,
                "3" => break,
                other if matches!(other.to_lowercase().as_str(), "q" | "quit" | "exit") => break,
                other => {
                    debug!("Unknown menu choice {:?}", other);
                    writeln!(self.output, "Unknown option, try again.")?;
                }
            }
        }

        writeln!(self.output, "Goodbye")?;
        self.output.flush()
    }

    fn is_configured(&self) -> bool {
        self.client.as_ref().is_some_and(|c| c.configured())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Cooking AI Agent")?;
        writeln!(self.output, "1) Search recipes")?;
        writeln!(self.output, "2) Extract ingredients from text")?;
        writeln!(self.output, "3) Quit")
    }

    fn handle_search(&mut self) -> io::Result<()> {
        let query = self
            .prompt("Search query (ingredient or title): ")?
            .unwrap_or_default();
        let query = query.trim();
        if query.is_empty() {
            return writeln!(self.output, "Empty query, try again.");
        }

        let results = search_recipes(query, DEFAULT_TOP_N);
        if results.is_empty() {
            return writeln!(self.output, "No matching recipes in sample dataset.");
        }

        for (i, recipe) in results.iter().enumerate() {
            self.print_recipe(i + 1, recipe)?;
        }
        Ok(())
    }

    fn print_recipe(&mut self, position: usize, recipe: &Recipe) -> io::Result<()> {
        writeln!(self.output, "{}. {}", position, recipe.title)?;
        writeln!(
            self.output,
            "   Ingredients: {}",
            recipe.ingredients.join(", ")
        )?;
        writeln!(self.output, "   Instructions: {}", recipe.instructions)
    }

    fn handle_extract(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Enter the text to extract ingredients from (finish with an empty line):"
        )?;
        self.output.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }

        let text = lines.join("\n");
        if text.trim().is_empty() {
            return writeln!(self.output, "No text provided.");
        }

        let client = self.client.as_deref().filter(|c| c.configured());
        let ingredients = extract_ingredients(&text, client);
        if ingredients.is_empty() {
            writeln!(self.output, "No ingredients extracted.")
        } else {
            writeln!(
                self.output,
                "Extracted ingredients: {}",
                ingredients.join(", ")
            )
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
