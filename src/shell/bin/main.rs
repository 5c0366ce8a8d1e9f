include!("../../lib.rs");
use crate::catalog::command::add_item_cmd::AddItemCommandRequest;
use crate::catalog::command::borrow_item_cmd::BorrowItemCommandRequest;
use crate::catalog::command::delete_item_cmd::DeleteItemCommandRequest;
use crate::catalog::command::return_item_cmd::ReturnItemCommandRequest;
use crate::catalog::command::search_items_cmd::SearchItemsCommandRequest;
use crate::core::command::CommandError;
use crate::core::controller::AppState;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;
use crate::items::domain::Item;
use crate::roster::command::register_member_cmd::RegisterMemberCommandRequest;
use crate::shell::{prompt, prompt_year, MENU};
use crate::utils::trace::setup_tracing;

#[tokio::main]
async fn main() -> LibraryResult<()> {
    setup_tracing();

    let state = AppState::new("main", RepositoryStore::Memory);
    seed(&state).await.map_err(|err| LibraryError::runtime(
        format!("seed failed {:?}", err).as_str(), None))?;

    loop {
        println!("{}", MENU);
        let choice = prompt("Choose an option: ")?;
        match choice.as_str() {
            "1" => add_book(&state).await?,
            "2" => list_books(&state).await,
            "3" => search_books(&state).await?,
            "4" => delete_book(&state).await?,
            "5" => register_member(&state).await?,
            "6" => list_members(&state).await,
            "7" => borrow_book(&state).await?,
            "8" => return_book(&state).await?,
            "9" => {
                println!("Exiting program.");
                break;
            }
            _ => println!("Invalid choice."),
        }
    }
    Ok(())
}

// same starter catalog and roster as the sample interaction
async fn seed(state: &AppState) -> Result<(), CommandError> {
    let _ = catalog::controller::add_item(state, AddItemCommandRequest::print(
        "The Power of Faith", "John Maxwell", "Spiritual", 2019)).await?;
    let _ = catalog::controller::add_item(state, AddItemCommandRequest::electronic(
        "AI for Beginners", "Sam Tech", "Technology", 2023, 2.5)).await?;
    let res = roster::controller::register_member(
        state, RegisterMemberCommandRequest::new("Blossom Dopamu")).await?;
    println!("Registered: {}", res.member);
    Ok(())
}

async fn add_book(state: &AppState) -> LibraryResult<()> {
    let title = prompt("Title: ")?;
    let author = prompt("Author: ")?;
    let genre = prompt("Genre: ")?;
    // fatal when not an integer
    let year = prompt_year("Year: ")?;
    let req = AddItemCommandRequest::print(title.as_str(), author.as_str(), genre.as_str(), year);
    if let Err(err) = catalog::controller::add_item(state, req).await {
        println!("{:?}", err);
    }
    Ok(())
}

async fn list_books(state: &AppState) {
    match catalog::controller::list_items(state).await {
        Ok(res) => {
            for item in res.items {
                println!("{}", item.describe());
            }
        }
        Err(err) => println!("{:?}", err),
    }
}

async fn search_books(state: &AppState) -> LibraryResult<()> {
    let keyword = prompt("Enter keyword to search: ")?;
    match catalog::controller::search_items(state, SearchItemsCommandRequest::new(keyword.as_str())).await {
        Ok(res) => {
            for item in res.items {
                println!("{}", item.describe());
            }
        }
        Err(CommandError::NotFound { .. }) => println!("No matching books found."),
        Err(err) => println!("{:?}", err),
    }
    Ok(())
}

async fn delete_book(state: &AppState) -> LibraryResult<()> {
    let keyword = prompt("Enter book title to delete: ")?;
    match catalog::controller::delete_item(state, DeleteItemCommandRequest::new(keyword.as_str())).await {
        Ok(_) => println!("Book deleted."),
        Err(CommandError::NotFound { .. }) => println!("Book not found."),
        Err(err) => println!("{:?}", err),
    }
    Ok(())
}

async fn register_member(state: &AppState) -> LibraryResult<()> {
    let name = prompt("Enter member name: ")?;
    match roster::controller::register_member(state, RegisterMemberCommandRequest::new(name.as_str())).await {
        Ok(res) => println!("Registered: {}", res.member),
        Err(err) => println!("{:?}", err),
    }
    Ok(())
}

async fn list_members(state: &AppState) {
    match roster::controller::list_members(state).await {
        Ok(res) => {
            for member in res.members {
                println!("{}", member);
            }
        }
        Err(err) => println!("{:?}", err),
    }
}

async fn borrow_book(state: &AppState) -> LibraryResult<()> {
    let keyword = prompt("Enter book title to borrow: ")?;
    match catalog::controller::borrow_item(state, BorrowItemCommandRequest::new(keyword.as_str())).await {
        Ok(_) => println!("Book borrowed."),
        Err(CommandError::InvalidState { .. }) => println!("Book already borrowed."),
        Err(CommandError::NotFound { .. }) => println!("Book not found."),
        Err(err) => println!("{:?}", err),
    }
    Ok(())
}

async fn return_book(state: &AppState) -> LibraryResult<()> {
    let keyword = prompt("Enter book title to return: ")?;
    match catalog::controller::return_item(state, ReturnItemCommandRequest::new(keyword.as_str())).await {
        Ok(_) => println!("Book returned."),
        Err(CommandError::InvalidState { .. }) => println!("Book wasn't borrowed."),
        Err(CommandError::NotFound { .. }) => println!("Book not found."),
        Err(err) => println!("{:?}", err),
    }
    Ok(())
}
