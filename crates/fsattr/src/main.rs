use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use fsattr_core::catalog::{lookup, AttributeId, Category, CommonAttribute};
use fsattr_core::request::{AttributeSelection, FsOptions};
use fsattr_core::DecodedAttributes;
use fsattr_utils::{debug, init_logging_with_config, LogConfig, LogLevel};

/// Inspect Darwin filesystem attributes through getattrlist.
#[derive(Parser, Debug)]
#[command(name = "fsattr")]
#[command(version)]
#[command(about = "Inspect Darwin filesystem attributes through getattrlist", long_about = None)]
struct Cli
{
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Print the attributes of one file, directory or volume
    Get
    {
        /// Path to inspect
        path: PathBuf,
        #[command(flatten)]
        selectors: Selectors,
        /// Do not follow a trailing symlink
        #[arg(long, default_value_t = false)]
        no_follow: bool,
    },
    /// Print the attributes of every entry of a directory (bulk read)
    List
    {
        /// Directory to enumerate
        directory: PathBuf,
        #[command(flatten)]
        selectors: Selectors,
        /// Do not follow a trailing symlink
        #[arg(long, default_value_t = false)]
        no_follow: bool,
    },
    /// Print the attribute catalog in buffer order
    Catalog
    {
        /// Only this category (common, volume, directory, file, extended)
        category: Option<Category>,
    },
}

/// Attribute names per category, comma-separated, or `all`
#[derive(Args, Debug, Default)]
struct Selectors
{
    /// Common attributes (e.g. name,objectType,modificationTime)
    #[arg(long, value_name = "NAMES")]
    common: Option<String>,
    /// Volume attributes (the path must be a volume root)
    #[arg(long, value_name = "NAMES")]
    volume: Option<String>,
    /// Directory attributes
    #[arg(long, value_name = "NAMES")]
    directory: Option<String>,
    /// File attributes
    #[arg(long, value_name = "NAMES")]
    file: Option<String>,
    /// Extended common attributes
    #[arg(long, value_name = "NAMES")]
    extended: Option<String>,
    /// Ask the kernel which attributes it actually returned
    #[arg(long, default_value_t = false)]
    returned: bool,
}

impl Selectors
{
    fn by_category(&self) -> [(Category, Option<&str>); 5]
    {
        [
            (Category::Common, self.common.as_deref()),
            (Category::Volume, self.volume.as_deref()),
            (Category::Directory, self.directory.as_deref()),
            (Category::File, self.file.as_deref()),
            (Category::CommonExtended, self.extended.as_deref()),
        ]
    }

    /// The selection to request; name, type and modification time when nothing was named.
    fn selection(&self) -> Result<AttributeSelection, String>
    {
        let mut selection = AttributeSelection::new();
        for (category, names) in self.by_category() {
            if let Some(names) = names {
                selection.extend(parse_names(category, names)?);
            }
        }

        if selection.is_empty() {
            selection = AttributeSelection::new()
                .with(CommonAttribute::Name)
                .with(CommonAttribute::ObjectType)
                .with(CommonAttribute::ModificationTime);
        }
        if self.returned {
            selection.insert(CommonAttribute::ReturnedAttributes);
        }
        Ok(selection)
    }
}

/// Attributes `all` leaves out: meta attributes, and Finder info which is only
/// decoded when named explicitly.
const NOT_IN_ALL: [CommonAttribute; 3] =
    [CommonAttribute::ReturnedAttributes, CommonAttribute::Error, CommonAttribute::FinderInfo];

fn parse_names(category: Category, names: &str) -> Result<Vec<AttributeId>, String>
{
    if names.trim().eq_ignore_ascii_case("all") {
        let valid = category.valid_mask();
        return Ok(category
            .attributes()
            .into_iter()
            .filter(|id| id.mask() & valid == id.mask())
            .filter(|id| !NOT_IN_ALL.iter().any(|skip| AttributeId::from(*skip) == *id))
            .collect());
    }

    names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            lookup(category, name).ok_or_else(|| {
                let known: Vec<&str> = category.attributes().iter().map(|id| id.name()).collect();
                format!("Unknown {category} attribute '{name}'. Valid names: {}", known.join(", "))
            })
        })
        .collect()
}

fn options(no_follow: bool) -> FsOptions
{
    if no_follow {
        FsOptions::NO_FOLLOW
    } else {
        FsOptions::empty()
    }
}

fn main()
{
    let cli = Cli::parse();

    // Keep the guard alive for the whole run
    let config = match LogConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };
    let config = match cli.log_level {
        Some(level) => config.with_level(level),
        None => config,
    };
    let _guard = match init_logging_with_config(config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>>
{
    match command {
        Commands::Get {
            path,
            selectors,
            no_follow,
        } => {
            let selection = selectors.selection()?;
            debug!(path = %path.display(), attributes = selection.len(), "Getting attributes");
            let attributes = get(path, &selection, options(no_follow))?;
            print_attributes(&attributes, "");
            Ok(())
        }
        Commands::List {
            directory,
            selectors,
            no_follow,
        } => {
            let mut selection = selectors.selection()?;
            // Per-entry errors only exist in bulk reads
            selection.insert(CommonAttribute::Name);
            selection.insert(CommonAttribute::Error);
            debug!(directory = %directory.display(), attributes = selection.len(), "Listing directory");

            for entry in list(directory, &selection, options(no_follow))? {
                println!("{}", entry.name().unwrap_or("?"));
                if let Some(code) = entry.error_code() {
                    println!("  error = {}", std::io::Error::from_raw_os_error(code));
                }
                print_attributes(&entry, "  ");
            }
            Ok(())
        }
        Commands::Catalog { category } => {
            match category {
                Some(category) => print_catalog(category),
                None => {
                    for category in Category::ALL {
                        print_catalog(category);
                    }
                }
            }
            Ok(())
        }
    }
}

fn print_attributes(attributes: &DecodedAttributes, indent: &str)
{
    for (id, value) in attributes.iter() {
        if id == AttributeId::from(CommonAttribute::Error) {
            continue;
        }
        println!("{indent}{id} = {value}");
    }
}

fn print_catalog(category: Category)
{
    println!("{category} (valid mask 0x{:08x})", category.valid_mask());
    for (index, id) in category.attributes().into_iter().enumerate() {
        let requestable = if id.mask() & category.valid_mask() == id.mask() {
            ""
        } else {
            "  (not requestable)"
        };
        println!("  {index:>2}  0x{:08x}  {:<26} {}{requestable}", id.mask(), id.name(), id.rule());
    }
}

#[cfg(target_os = "macos")]
fn get(path: PathBuf, selection: &AttributeSelection, options: FsOptions) -> fsattr_core::Result<DecodedAttributes>
{
    fsattr_core::get_attributes(&fsattr_core::Target::Path(path), selection, options)
}

#[cfg(target_os = "macos")]
fn list(directory: PathBuf, selection: &AttributeSelection, options: FsOptions)
    -> fsattr_core::Result<Vec<DecodedAttributes>>
{
    fsattr_core::read_directory(directory, selection, options)
}

#[cfg(not(target_os = "macos"))]
fn get(_path: PathBuf, _selection: &AttributeSelection, _options: FsOptions)
    -> fsattr_core::Result<DecodedAttributes>
{
    Err(unsupported())
}

#[cfg(not(target_os = "macos"))]
fn list(_directory: PathBuf, _selection: &AttributeSelection, _options: FsOptions)
    -> fsattr_core::Result<Vec<DecodedAttributes>>
{
    Err(unsupported())
}

#[cfg(not(target_os = "macos"))]
fn unsupported() -> fsattr_core::AttributeError
{
    fsattr_core::AttributeError::InvalidArgument("getattrlist is only available on macOS".to_string())
}
