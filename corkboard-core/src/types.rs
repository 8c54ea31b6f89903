use serde::{Deserialize, Serialize};

/// A named ordered list of task strings. Task order is display order;
/// task text carries no identity and no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub tasks: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, tasks: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tasks,
        }
    }
}

/// The top-level board: a name plus an ordered sequence of columns.
/// This is also the persisted shape -- the whole board is serialized as one
/// JSON document, with no version field and no migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Board {
    /// The fixed seed board used when no snapshot exists in storage.
    pub fn default_board() -> Self {
        Self {
            name: "Test Board".to_string(),
            columns: vec![
                Column::new(
                    "Ideas",
                    vec![
                        "Some random idea".to_string(),
                        "This is another random idea".to_string(),
                        "build an awesome application".to_string(),
                    ],
                ),
                Column::new(
                    "Research",
                    vec![
                        "Lorem ipsum".to_string(),
                        "foo".to_string(),
                        "This was in the 'Research' column".to_string(),
                    ],
                ),
                Column::new(
                    "Todo",
                    vec![
                        "Get to work".to_string(),
                        "Pick up groceries".to_string(),
                        "Go home".to_string(),
                        "Fall asleep".to_string(),
                    ],
                ),
                Column::new(
                    "Done",
                    vec![
                        "Get up".to_string(),
                        "Brush teeth".to_string(),
                        "Take a shower".to_string(),
                        "Check e-mail".to_string(),
                        "Walk dog".to_string(),
                    ],
                ),
            ],
        }
    }

    /// Total number of tasks across all columns.
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

/// Coordinate of the task currently open in the edit/delete flow.
/// Positions are only valid until the next structural mutation of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub column: usize,
    pub task: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_seed() {
        let board = Board::default_board();
        assert_eq!(board.name, "Test Board");

        let names: Vec<&str> = board.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ideas", "Research", "Todo", "Done"]);

        let counts: Vec<usize> = board.columns.iter().map(|c| c.tasks.len()).collect();
        assert_eq!(counts, [3, 3, 4, 5]);

        assert_eq!(board.columns[0].tasks[0], "Some random idea");
        assert_eq!(board.columns[1].tasks[2], "This was in the 'Research' column");
        assert_eq!(board.columns[3].tasks[4], "Walk dog");
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let board = Board::default_board();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_json_shape() {
        let board = Board {
            name: "B".to_string(),
            columns: vec![Column::new("Todo", vec!["a".to_string()])],
        };
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r#"{"name":"B","columns":[{"name":"Todo","tasks":["a"]}]}"#
        );
    }
}
