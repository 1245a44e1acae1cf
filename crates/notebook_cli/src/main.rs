//! Demonstration driver for the contact notebook.
//!
//! # Responsibility
//! - Assemble a small notebook and print it before and after an address
//!   change delegated through the owning person.
//! - Keep stdout deterministic; diagnostics go to rolling log files.

use log::info;
use notebook_core::{default_log_level, init_logging, Notebook, Person};

fn main() {
    // Logging is best-effort here: a failed bootstrap must not change the
    // demonstration output or the exit code.
    if let Err(err) = init_logging(default_log_level(), &default_log_dir()) {
        eprintln!("logging disabled: {err}");
    }
    info!(
        "event=demo_start module=cli status=ok version={}",
        notebook_core::core_version()
    );

    println!("Contact notebook with person and address records");
    println!("Demonstrating delegated address updates");
    println!();

    let mut notebook = build_demo_notebook();
    print!("{notebook}");

    println!("Changing Ivan Petrenko's address...");
    println!();
    if let Some(entry) = notebook.entries_mut().first_mut() {
        entry.set_address("Nova St, 999", "Odesa", "Ukraine");
        info!(
            "event=address_changed module=cli status=ok entry=0 city={}",
            entry.address().city
        );
    }

    print!("{notebook}");
    info!(
        "event=demo_done module=cli status=ok entries={}",
        notebook.len()
    );
}

fn default_log_dir() -> String {
    std::env::temp_dir()
        .join("notebook_cli-logs")
        .to_string_lossy()
        .into_owned()
}

fn build_demo_notebook() -> Notebook {
    let mut notebook = Notebook::new("My Address Book");

    let mut ivan = Person::new("Ivan Petrenko", "+380-67-123-4567");
    ivan.set_address("Khreshchatyk St, 123", "Kyiv", "Ukraine");
    notebook.add_entry(ivan);

    let mut maria = Person::new("Maria Kovalenko", "+380-95-987-6543");
    maria.set_address("Svobody Ave, 456", "Lviv", "Ukraine");
    notebook.add_entry(maria);

    notebook
}

#[cfg(test)]
mod tests {
    use super::build_demo_notebook;

    #[test]
    fn demo_notebook_keeps_insertion_order() {
        let notebook = build_demo_notebook();
        assert_eq!(notebook.len(), 2);
        assert_eq!(notebook.entries()[0].name(), "Ivan Petrenko");
        assert_eq!(notebook.entries()[1].name(), "Maria Kovalenko");
    }

    #[test]
    fn demo_render_contains_initial_address_line() {
        let rendered = build_demo_notebook().to_string();
        assert!(rendered.contains("======== My Address Book ========"));
        assert!(rendered.contains("Address: Khreshchatyk St, 123, Kyiv, Ukraine"));
    }
}
