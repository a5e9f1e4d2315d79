//! Game configuration options.

/// Configuration options for a trivia game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use quizboard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_initial_players(3)
///     .with_point_ladder([200, 400, 600, 800, 1000]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players seated when the game is created.
    pub initial_players: u8,
    /// Point values for new and placeholder categories.
    pub point_ladder: [u32; 5],
    /// Prefix for generated player names (`"{label} {n}"`).
    pub player_label: &'static str,
    /// Title given to categories added from the editor.
    pub new_category_title: &'static str,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_players: 2,
            point_ladder: [100, 200, 300, 400, 500],
            player_label: "Игрок",
            new_category_title: "Новая тема",
        }
    }
}

impl GameOptions {
    /// Sets the number of players seated at start.
    ///
    /// # Example
    ///
    /// ```
    /// use quizboard::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_players(4);
    /// assert_eq!(options.initial_players, 4);
    /// ```
    #[must_use]
    pub const fn with_initial_players(mut self, players: u8) -> Self {
        self.initial_players = players;
        self
    }

    /// Sets the point ladder.
    ///
    /// # Example
    ///
    /// ```
    /// use quizboard::GameOptions;
    ///
    /// let options = GameOptions::default().with_point_ladder([10, 20, 30, 40, 50]);
    /// assert_eq!(options.point_ladder[4], 50);
    /// ```
    #[must_use]
    pub const fn with_point_ladder(mut self, ladder: [u32; 5]) -> Self {
        self.point_ladder = ladder;
        self
    }

    /// Sets the player name prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use quizboard::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_label("Player");
    /// assert_eq!(options.player_label, "Player");
    /// ```
    #[must_use]
    pub const fn with_player_label(mut self, label: &'static str) -> Self {
        self.player_label = label;
        self
    }

    /// Sets the title of categories added from the editor.
    ///
    /// # Example
    ///
    /// ```
    /// use quizboard::GameOptions;
    ///
    /// let options = GameOptions::default().with_new_category_title("New theme");
    /// assert_eq!(options.new_category_title, "New theme");
    /// ```
    #[must_use]
    pub const fn with_new_category_title(mut self, title: &'static str) -> Self {
        self.new_category_title = title;
        self
    }
}
