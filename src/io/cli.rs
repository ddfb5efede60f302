//! Command-line front-end driving the drill session from a terminal

use crate::catalog::{Catalog, Category, PatternRecord};
use crate::io::configuration::{DEFAULT_LOG_FILTER, MIN_PATTERNS_FOR_REPICK, VERBOSE_LOG_FILTER};
use crate::io::error::{Result, invalid_parameter};
use crate::io::shortcuts::{Intent, help_lines};
use crate::selection::random::{RandomSource, RngSource};
use crate::selection::selector::Selector;
use crate::selection::session::Session;
use crate::settings::document::{CategoryToggle, PreferenceDocument};
use crate::settings::storage::{FileStorage, KeyValueStorage};
use crate::settings::store::SettingsStore;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cubedrill")]
#[command(
    author,
    version,
    about = "Flashcard drills for speedcubing F2L, OLL and PLL algorithms"
)]
/// Command-line arguments for the drill front-end
pub struct Cli {
    /// Directory preferences are stored in (defaults to the platform data directory)
    #[arg(long, value_name = "DIR", global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Random seed for reproducible picks
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Action to run; an interactive drill when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Front-end actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive drill reading one shortcut per line
    Drill,
    /// Print one random enabled pattern
    Pick {
        /// Pattern id that must not be picked
        #[arg(long, value_name = "ID")]
        exclude: Option<String>,
    },
    /// Show which patterns take part in the drill
    Status,
    /// Enable patterns: `all`, a category (`f2l`, `oll`, `pll`) or a pattern id
    Enable {
        /// Patterns to enable
        #[arg(required = true, value_name = "TARGET")]
        targets: Vec<String>,
    },
    /// Disable patterns: `all`, a category (`f2l`, `oll`, `pll`) or a pattern id
    Disable {
        /// Patterns to disable
        #[arg(required = true, value_name = "TARGET")]
        targets: Vec<String>,
    },
    /// Forget stored preferences
    Reset,
}

/// Set of patterns named on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every pattern
    All,
    /// Every pattern of one category
    Category(Category),
    /// A single pattern id
    Pattern(String),
}

impl Target {
    /// Parse `all`, a category name or a catalog pattern id
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the text names nothing in the catalog
    pub fn parse(text: &str, catalog: &Catalog) -> Result<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        if let Ok(category) = text.parse::<Category>() {
            return Ok(Self::Category(category));
        }

        let id = text.to_ascii_lowercase();
        if catalog.contains(&id) {
            Ok(Self::Pattern(id))
        } else {
            Err(invalid_parameter(
                "target",
                &text,
                &"expected all, f2l, oll, pll or a pattern id such as oll_07",
            ))
        }
    }

    /// Set the enabled flag of every pattern the target names
    pub fn apply(&self, preferences: &mut PreferenceDocument, enabled: bool) {
        match self {
            Self::All => preferences.set_all_enabled(enabled),
            Self::Category(category) => preferences.set_category_enabled(*category, enabled),
            Self::Pattern(id) => {
                preferences.set_enabled(id, enabled);
            }
        }
    }
}

fn parse_pattern_id(text: &str, catalog: &Catalog) -> Result<String> {
    let id = text.trim().to_ascii_lowercase();
    if catalog.contains(&id) {
        Ok(id)
    } else {
        Err(invalid_parameter(
            "exclude",
            &text,
            &"expected a pattern id such as f2l_12",
        ))
    }
}

fn parse_targets<'t>(
    targets: impl IntoIterator<Item = &'t str>,
    catalog: &Catalog,
) -> Result<Vec<Target>> {
    targets
        .into_iter()
        .map(|text| Target::parse(text, catalog))
        .collect()
}

impl Cli {
    /// Storage backend selected by `--storage-dir`
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if no directory was given and the platform
    /// has no data directory
    pub fn storage(&self) -> Result<FileStorage> {
        self.storage_dir
            .as_ref()
            .map_or_else(FileStorage::default_location, |dir| {
                Ok(FileStorage::new(dir))
            })
    }

    /// Random source selected by `--seed`
    pub fn random_source(&self) -> RngSource<StdRng> {
        self.seed.map_or_else(
            RngSource::<StdRng>::from_os_rng,
            RngSource::<StdRng>::seeded,
        )
    }

    /// Log filter used unless `RUST_LOG` is set
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }

    /// Install the stderr log subscriber; later calls are ignored
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_filter()));
        // Fails only when a subscriber is already installed
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if a target is invalid, preferences can't be saved
    /// outside the interactive drill, or writing output fails
    pub fn run<S: KeyValueStorage, R: RandomSource>(
        &self,
        catalog: &Catalog,
        storage: S,
        random: R,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<()> {
        match self.command.as_ref() {
            None | Some(Command::Drill) => {
                let mut session = Session::new(catalog, storage, random);
                run_drill(&mut session, input, output)
            }
            Some(Command::Pick { exclude }) => {
                let exclude = exclude
                    .as_deref()
                    .map(|id| parse_pattern_id(id, catalog))
                    .transpose()?;
                let store = SettingsStore::new(catalog, storage);
                let preferences = store.load();
                let enabled = catalog.enabled_set(&preferences);
                let selection = Selector::new(random).pick(&enabled, exclude.as_deref());
                write_card(output, selection, false)
            }
            Some(Command::Status) => {
                let store = SettingsStore::new(catalog, storage);
                write_status(output, &store.load())
            }
            Some(Command::Enable { targets }) => {
                update_preferences(catalog, storage, targets, true, output)
            }
            Some(Command::Disable { targets }) => {
                update_preferences(catalog, storage, targets, false, output)
            }
            Some(Command::Reset) => {
                let mut store = SettingsStore::new(catalog, storage);
                store.reset()?;
                writeln!(output, "Preferences reset, every pattern is enabled")?;
                Ok(())
            }
        }
    }
}

fn update_preferences<S: KeyValueStorage>(
    catalog: &Catalog,
    storage: S,
    targets: &[String],
    enabled: bool,
    output: &mut impl Write,
) -> Result<()> {
    let targets = parse_targets(targets.iter().map(String::as_str), catalog)?;
    let mut store = SettingsStore::new(catalog, storage);
    let mut preferences = store.load();
    for target in &targets {
        target.apply(&mut preferences, enabled);
    }
    store.save(&preferences)?;
    write_status(output, &preferences)
}

/// Interactive loop: one shortcut, or `+TARGET` / `-TARGET`, per input line
///
/// Ends on `q` or end of input. Save failures are reported and the drill
/// continues with its previous preferences.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails
pub fn run_drill<S: KeyValueStorage, R: RandomSource>(
    session: &mut Session<'_, S, R>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    session.start();
    write_card(output, session.selection(), session.is_revealed())?;
    write_help(output)?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        if let Some(intent) = Intent::from_line(command) {
            match intent {
                Intent::Repick => {
                    if session.can_repick() {
                        session.repick()?;
                        write_card(output, session.selection(), false)?;
                    } else {
                        writeln!(
                            output,
                            "Enable at least {MIN_PATTERNS_FOR_REPICK} patterns to pick again"
                        )?;
                    }
                }
                Intent::Reveal => {
                    session.reveal()?;
                    write_card(output, session.selection(), session.is_revealed())?;
                }
                Intent::OpenSettings => {
                    write_status(output, session.preferences())?;
                    writeln!(output, "{TOGGLE_USAGE}")?;
                }
                Intent::Quit => break,
            }
        } else if let Some(targets) = command.strip_prefix('+') {
            toggle_in_session(session, targets, true, output)?;
        } else if let Some(targets) = command.strip_prefix('-') {
            toggle_in_session(session, targets, false, output)?;
        } else {
            writeln!(output, "Unknown command '{command}'")?;
            write_help(output)?;
        }
    }

    Ok(())
}

const TOGGLE_USAGE: &str =
    "Use +TARGET or -TARGET to enable or disable patterns, e.g. -oll or +pll_03";

fn toggle_in_session<S: KeyValueStorage, R: RandomSource>(
    session: &mut Session<'_, S, R>,
    targets: &str,
    enabled: bool,
    output: &mut impl Write,
) -> Result<()> {
    let targets = match parse_targets(targets.split_whitespace(), session.catalog()) {
        Ok(targets) => targets,
        Err(error) => {
            writeln!(output, "{error}")?;
            return Ok(());
        }
    };

    if targets.is_empty() {
        writeln!(output, "{TOGGLE_USAGE}")?;
        return Ok(());
    }

    let mut preferences = session.preferences().clone();
    for target in &targets {
        target.apply(&mut preferences, enabled);
    }

    match session.apply_preferences(&preferences) {
        Ok(selection) => write_card(output, selection, false),
        Err(error) => {
            writeln!(output, "Could not save preferences: {error}")?;
            Ok(())
        }
    }
}

fn write_help(output: &mut impl Write) -> Result<()> {
    for line in help_lines() {
        writeln!(output, "  {line}")?;
    }
    Ok(())
}

/// Print a card, or the "no valid pattern" notice when there is none
///
/// # Errors
///
/// Returns an error if writing output fails
pub fn write_card(
    output: &mut impl Write,
    selection: Option<&PatternRecord>,
    revealed: bool,
) -> Result<()> {
    match selection {
        Some(record) => {
            writeln!(output, "{} ({})", record.id, record.category)?;
            writeln!(output, "  pattern: {}", record.image_refs.pattern)?;
            if revealed {
                writeln!(output, "  moves:   {}", record.image_refs.with_moves)?;
            }
        }
        None => {
            writeln!(output, "There is no valid pattern!")?;
            writeln!(output, "Please select valid patterns in the settings.")?;
        }
    }
    Ok(())
}

/// Print how many patterns of each category are enabled
///
/// # Errors
///
/// Returns an error if writing output fails
pub fn write_status(output: &mut impl Write, preferences: &PreferenceDocument) -> Result<()> {
    for category in Category::ALL {
        let entries = preferences.entries(category);
        let enabled = entries.iter().filter(|entry| entry.enabled).count();
        let toggle = match preferences.category_toggle(category) {
            CategoryToggle::All => "all",
            CategoryToggle::Partial => "partial",
            CategoryToggle::None => "none",
        };
        writeln!(
            output,
            "{category}: {enabled}/{} enabled ({toggle})",
            entries.len()
        )?;

        if preferences.category_toggle(category) == CategoryToggle::Partial {
            let disabled: Vec<&str> = entries
                .iter()
                .filter(|entry| !entry.enabled)
                .map(|entry| entry.id.as_str())
                .collect();
            writeln!(output, "  disabled: {}", disabled.join(", "))?;
        }
    }
    Ok(())
}
