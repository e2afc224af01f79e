use loxscan::run;

/// Prompt state: every entered line is scanned on its own.
#[derive(Debug, Default)]
pub struct Repl {
    entries: usize,
}

impl Repl {
    pub fn rep(&mut self, input: &str) {
        self.entries += 1;
        let name = format!("<input:{}>", self.entries);
        run(&name, input);
    }
}
