use std::io;
use std::io::Write;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) const MENU: &str = "\n1. Add Book\n2. List Books\n3. Search Book\n4. Delete Book\n5. Register Member\n6. List Members\n7. Borrow Book\n8. Return Book\n9. Exit";

pub(crate) fn prompt(label: &str) -> LibraryResult<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(LibraryError::runtime("end of input", None));
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

// a non-integer year is an input-conversion failure that ends the session
pub(crate) fn prompt_year(label: &str) -> LibraryResult<i32> {
    Ok(prompt(label)?.trim().parse::<i32>()?)
}
