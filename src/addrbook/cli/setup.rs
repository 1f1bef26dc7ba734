use addrbook::model::{ContactField, ContactFields};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version = get_version())]
#[command(about = "Personal contact book kept in a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this data file instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Field values given on the command line. Unset flags leave a field alone.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// First name
    #[arg(long)]
    pub first: Option<String>,

    /// Last name
    #[arg(long)]
    pub last: Option<String>,

    /// Postal address
    #[arg(long)]
    pub address: Option<String>,

    /// Mobile number
    #[arg(long)]
    pub mobile: Option<String>,

    /// Secondary number
    #[arg(long)]
    pub secondary: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Path to a picture of the contact
    #[arg(long)]
    pub picture: Option<String>,
}

impl FieldArgs {
    fn pairs(&self) -> [(ContactField, &Option<String>); 7] {
        [
            (ContactField::FirstName, &self.first),
            (ContactField::LastName, &self.last),
            (ContactField::Address, &self.address),
            (ContactField::MobileNumber, &self.mobile),
            (ContactField::SecondaryNumber, &self.secondary),
            (ContactField::EmailAddress, &self.email),
            (ContactField::PicturePath, &self.picture),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().iter().all(|(_, v)| v.is_none())
    }

    /// Overwrites the fields that were given, trimmed; the rest keep `base`'s values.
    pub fn apply_to(&self, mut base: ContactFields) -> ContactFields {
        for (field, value) in self.pairs() {
            if let Some(value) = value {
                base.set(field, value.trim());
            }
        }
        base
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    #[command(alias = "new", display_order = 1)]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List contacts
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Order by this field (first, last, address, mobile, secondary, email, picture)
        #[arg(short, long, value_name = "FIELD")]
        sort: Option<ContactField>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List contacts ordered by a field
    #[command(display_order = 3)]
    Sort {
        /// Field to order by
        field: ContactField,

        #[arg(long)]
        json: bool,
    },

    /// List contacts containing a text in any field
    #[command(alias = "search", display_order = 4)]
    Filter {
        /// Text to look for (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show every field of one or more contacts
    #[command(alias = "v", display_order = 10)]
    View {
        /// Listing numbers or a name (e.g. 1 3, or amy lee)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Change a contact's fields
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Listing number or name of the contact
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete one or more contacts
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Listing numbers or a name (e.g. 1 3, or amy lee)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Erase every contact
    #[command(display_order = 13)]
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Report lines in the data file that cannot be read
    #[command(display_order = 20)]
    Check,

    /// Print the data file path
    #[command(display_order = 21)]
    Path,

    /// Get or set configuration
    #[command(display_order = 22)]
    Config {
        /// Configuration key (malformed-lines, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
