/// Interactive shell for the corkboard kanban engine.
///
/// Plays the UI collaborator role: every line is one UI event (a drop, a
/// prompt result, a form submit, a click) fed into the controller, and the
/// board is re-rendered from the mutated model after each one.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use corkboard_core::controller::BoardController;
use corkboard_core::storage::local::LocalStore;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    ShowBoard,
    AddColumn(String),
    DeleteColumn(usize),
    SetDraft(usize, String),
    AddTask(usize),
    Reorder(usize, usize, usize),
    Transfer(usize, usize, usize, usize),
    Edit(usize, usize),
    SetEditText(String),
    SaveEdit,
    DeleteSelected,
    CloseEdit,
    Help,
    Quit,
}

/// Everything after the first `n_words` whitespace-delimited words,
/// kept verbatim apart from leading whitespace and the trailing newline.
fn rest_of(line: &str, n_words: usize) -> String {
    let mut rest = line.trim_end_matches(['\r', '\n']).trim_start();
    for _ in 0..n_words {
        match rest.find(char::is_whitespace) {
            Some(i) => rest = rest[i..].trim_start(),
            None => return String::new(),
        }
    }
    rest.to_string()
}

/// Parse one input line into a command. `None` means unrecognized input.
fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?;

    match head {
        "board" => Some(Command::ShowBoard),
        "col" => match words.next()? {
            "add" => Some(Command::AddColumn(rest_of(line, 2))),
            "rm" => words.next()?.parse().ok().map(Command::DeleteColumn),
            _ => None,
        },
        "draft" => {
            let column = words.next()?.parse().ok()?;
            Some(Command::SetDraft(column, rest_of(line, 2)))
        }
        "add" => words.next()?.parse().ok().map(Command::AddTask),
        "move" => {
            let column = words.next()?.parse().ok()?;
            let from = words.next()?.parse().ok()?;
            let to = words.next()?.parse().ok()?;
            Some(Command::Reorder(column, from, to))
        }
        "send" => {
            let src = words.next()?.parse().ok()?;
            let dst = words.next()?.parse().ok()?;
            let from = words.next()?.parse().ok()?;
            let to = words.next()?.parse().ok()?;
            Some(Command::Transfer(src, dst, from, to))
        }
        "edit" => {
            let column = words.next()?.parse().ok()?;
            let task = words.next()?.parse().ok()?;
            Some(Command::Edit(column, task))
        }
        "text" => Some(Command::SetEditText(rest_of(line, 1))),
        "save" => Some(Command::SaveEdit),
        "del" => Some(Command::DeleteSelected),
        "close" => Some(Command::CloseEdit),
        "help" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn render(ctrl: &BoardController) {
    let board = ctrl.board();
    println!("== {} ==", board.name);
    for (ci, col) in board.columns.iter().enumerate() {
        println!("[{}] {}", ci, col.name);
        for (ti, task) in col.tasks.iter().enumerate() {
            println!("    {}. {}", ti, task);
        }
        if let Some(draft) = ctrl.draft(ci) {
            if !draft.is_empty() {
                println!("    (draft: {})", draft);
            }
        }
    }
    if let Some(sel) = ctrl.selection() {
        println!(
            "editing [{}] task {} -> {:?}",
            sel.column,
            sel.task,
            ctrl.edit_draft()
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  board                       render the board");
    println!("  col add <name>              append a column");
    println!("  col rm <col>                delete a column");
    println!("  draft <col> <text>          set the new-task draft for a column");
    println!("  add <col>                   append the column's draft as a task");
    println!("  move <col> <from> <to>      reorder a task within a column");
    println!("  send <src> <dst> <from> <to>  move a task across columns");
    println!("  edit <col> <task>           open a task for edit/delete");
    println!("  text <text>                 set the edit text");
    println!("  save | del | close          finish the edit flow");
    println!("  quit");
}

/// Default slot directory: platform data dir, `corkboard` subfolder.
fn default_slot_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("corkboard")
}

fn slot_dir_from_args() -> PathBuf {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--slot" {
            if let Some(dir) = args.next() {
                return PathBuf::from(dir);
            }
        }
    }
    default_slot_dir()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let slot_dir = slot_dir_from_args();
    log::debug!("[corkboard.cli] using slot directory {}", slot_dir.display());

    let store = LocalStore::new(slot_dir);
    let mut ctrl = match BoardController::new(Box::new(store)) {
        Ok(ctrl) => ctrl,
        Err(e) => {
            eprintln!("failed to load stored board: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(notice) = ctrl.take_notice() {
        println!("! {}", notice);
    }

    render(&ctrl);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::warn!("[corkboard.cli] failed to read input: {}", e);
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Command::ShowBoard) => render(&ctrl),
            Some(Command::AddColumn(name)) => {
                ctrl.add_column(&name);
                render(&ctrl);
            }
            Some(Command::DeleteColumn(index)) => {
                ctrl.delete_column(index);
                render(&ctrl);
            }
            Some(Command::SetDraft(column, text)) => {
                ctrl.set_draft(column, &text);
                render(&ctrl);
            }
            Some(Command::AddTask(column)) => {
                ctrl.add_task(column);
                render(&ctrl);
            }
            Some(Command::Reorder(column, from, to)) => {
                ctrl.reorder(column, from, to);
                render(&ctrl);
            }
            Some(Command::Transfer(src, dst, from, to)) => {
                ctrl.transfer(src, dst, from, to);
                render(&ctrl);
            }
            Some(Command::Edit(column, task)) => {
                ctrl.select_task(column, task);
                render(&ctrl);
            }
            Some(Command::SetEditText(text)) => {
                ctrl.set_edit_draft(&text);
                render(&ctrl);
            }
            Some(Command::SaveEdit) => {
                ctrl.save_edited_task();
                render(&ctrl);
            }
            Some(Command::DeleteSelected) => {
                ctrl.delete_selected_task();
                render(&ctrl);
            }
            Some(Command::CloseEdit) => {
                ctrl.close_selection();
                render(&ctrl);
            }
            Some(Command::Help) => print_help(),
            Some(Command::Quit) => break,
            None => println!("unrecognized command, try `help`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_commands() {
        assert_eq!(
            parse_command("col add In Progress"),
            Some(Command::AddColumn("In Progress".to_string()))
        );
        assert_eq!(parse_command("col rm 2"), Some(Command::DeleteColumn(2)));
        assert_eq!(parse_command("col nope"), None);
    }

    #[test]
    fn test_parse_task_commands() {
        assert_eq!(
            parse_command("draft 1 buy milk"),
            Some(Command::SetDraft(1, "buy milk".to_string()))
        );
        assert_eq!(parse_command("add 1"), Some(Command::AddTask(1)));
        // Interior whitespace in task text survives parsing.
        assert_eq!(
            parse_command("draft 0 two  spaces\n"),
            Some(Command::SetDraft(0, "two  spaces".to_string()))
        );
        assert_eq!(parse_command("move 0 2 1"), Some(Command::Reorder(0, 2, 1)));
        assert_eq!(
            parse_command("send 0 1 2 3"),
            Some(Command::Transfer(0, 1, 2, 3))
        );
    }

    #[test]
    fn test_parse_edit_flow() {
        assert_eq!(parse_command("edit 1 0"), Some(Command::Edit(1, 0)));
        // Bare `text` sets an empty edit draft -- edits may save empty text.
        assert_eq!(
            parse_command("text"),
            Some(Command::SetEditText(String::new()))
        );
        assert_eq!(parse_command("save"), Some(Command::SaveEdit));
        assert_eq!(parse_command("del"), Some(Command::DeleteSelected));
        assert_eq!(parse_command("close"), Some(Command::CloseEdit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_command("frobnicate"), None);
        assert_eq!(parse_command("move 0 x 1"), None);
        assert_eq!(parse_command(""), None);
    }
}
