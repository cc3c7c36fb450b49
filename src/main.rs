//! reindent - Leading-indentation corrector for script and markup sources

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, BufReader, Cursor, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use glob::Pattern;
use rayon::prelude::*;
use reindent::process::reindent_stream;
use reindent::{parse_args, CliArgs, Config, Result, Syntax};
use walkdir::WalkDir;

/// Default maximum file size in bytes (100 MB)
/// Files larger than this are skipped to prevent memory exhaustion
const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = parse_args();

    // Check if we should read from stdin
    let use_stdin =
        args.inputs.is_empty() || (args.inputs.len() == 1 && args.inputs[0].as_os_str() == "-");

    // If no inputs and running interactively, print usage; otherwise read from stdin
    if args.inputs.is_empty() && io::stdin().is_terminal() {
        print_usage();
        return Ok(());
    }

    if use_stdin {
        // Process stdin - use current directory for config discovery
        let config = build_config(&args, None)?;
        return process_stdin(&config, &args);
    }

    // Build base configuration for parallel processing
    // For explicit config files, we use one config for all files
    // For auto-discovery, each file may have its own config
    let use_per_file_config = args.config.is_none();
    let base_config = if use_per_file_config {
        None
    } else {
        Some(build_config(&args, None)?)
    };

    // Configure thread pool if --jobs specified
    if let Some(jobs) = args.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                eprintln!("Warning: failed to configure thread pool: {e}");
            }
        }
    }

    // Collect all files to process
    let files = collect_files(&args);

    if files.is_empty() {
        if !args.silent {
            eprintln!("No script or markup files found to reindent.");
        }
        return Ok(());
    }

    // Process files
    let use_sequential = args.stdout || args.jobs == Some(1);
    if use_sequential {
        // Sequential processing for stdout or --jobs 1
        process_files_sequential(&files, base_config.as_ref(), &args);
    } else {
        // Parallel processing for in-place reindentation
        process_files_parallel(&files, base_config.as_ref(), &args);
    }

    Ok(())
}

/// Build configuration from CLI args and optional config file
///
/// If `for_path` is provided and no explicit config file is specified,
/// uses auto-discovery to find config files in parent directories.
fn build_config(args: &CliArgs, for_path: Option<&Path>) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        // Explicit config file specified
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else if let Some(path) = for_path {
        // Auto-discover config files from parent directories
        if args.debug {
            let discovered = Config::discover_config_files(path);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered for: {}", path.display());
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", path.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(path)
    } else {
        // No path provided, use current directory for discovery
        if args.debug {
            let cwd = std::env::current_dir().unwrap_or_default();
            let discovered = Config::discover_config_files(&cwd);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered in current directory");
            } else {
                eprintln!("[DEBUG] Discovered config files:");
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&std::env::current_dir().unwrap_or_default())
    };

    // Override with CLI arguments
    if let Some(indent) = args.indent {
        config.indent = indent;
    }
    if args.tabs {
        config.use_tabs = true;
    }
    if let Some(syntax) = args.syntax {
        config.syntax = Some(syntax);
    }

    // Print final config in debug mode
    if args.debug {
        print_config_debug(&config);
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    eprintln!("[DEBUG]   indent: {}", config.indent);
    eprintln!("[DEBUG]   use_tabs: {}", config.use_tabs);
    match config.syntax {
        Some(syntax) => eprintln!("[DEBUG]   syntax: {syntax} (forced)"),
        None => eprintln!("[DEBUG]   syntax: detect from extension"),
    }
}

/// Collect all files to process, handling directories and recursive flag
fn collect_files(args: &CliArgs) -> Vec<PathBuf> {
    // Compile exclude patterns
    let exclude_patterns: Vec<Pattern> = args
        .exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut files = Vec::new();

    for input in &args.inputs {
        if input.is_file() {
            if !is_excluded(input, &exclude_patterns) {
                files.push(input.clone());
            }
        } else if input.is_dir() {
            if args.recursive {
                // Recursive directory traversal
                // Note: WalkDir detects symlink loops when follow_links(true) and
                // returns errors for them. We skip errors via filter_map(ok).
                // max_depth prevents runaway traversal in pathological directory structures.
                for entry in WalkDir::new(input)
                    .follow_links(true)
                    .max_depth(256)
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                {
                    let path = entry.path();
                    if path.is_file()
                        && detect_syntax(path, args).is_some()
                        && !is_excluded(path, &exclude_patterns)
                    {
                        files.push(path.to_path_buf());
                    }
                }
            } else {
                // Non-recursive: only direct children
                if let Ok(entries) = std::fs::read_dir(input) {
                    for entry in entries.filter_map(std::result::Result::ok) {
                        let path = entry.path();
                        if path.is_file()
                            && detect_syntax(&path, args).is_some()
                            && !is_excluded(&path, &exclude_patterns)
                        {
                            files.push(path);
                        }
                    }
                }
            }
        }
    }

    files
}

/// Check if a path matches any exclusion pattern
fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        // Match against full path
        if pattern.matches(&path_str) {
            return true;
        }

        // Match against file name only
        if let Some(file_name) = path.file_name() {
            if pattern.matches(&file_name.to_string_lossy()) {
                return true;
            }
        }

        // Match against each path component (for directory patterns)
        for component in path.components() {
            if let std::path::Component::Normal(c) = component {
                if pattern.matches(&c.to_string_lossy()) {
                    return true;
                }
            }
        }
    }

    false
}

/// Determine the syntax for a file, honoring a `--syntax` override.
fn detect_syntax(path: &Path, args: &CliArgs) -> Option<Syntax> {
    if let Some(syntax) = args.syntax {
        return Some(syntax);
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Syntax::from_extension)
}

/// Process files sequentially (for stdout output)
fn process_files_sequential(files: &[PathBuf], base_config: Option<&Config>, args: &CliArgs) {
    for path in files {
        // Use base config if provided, otherwise discover per-file config
        let file_result = if let Some(config) = base_config {
            process_single_file(path, config, args)
        } else {
            match build_config(args, Some(path)) {
                Ok(config) => process_single_file(path, &config, args),
                Err(e) => Err(e),
            }
        };

        if let Err(e) = file_result {
            eprintln!("Error reindenting {}: {}", path.display(), e);
        }
    }
}

/// Process files in parallel using Rayon
fn process_files_parallel(files: &[PathBuf], base_config: Option<&Config>, args: &CliArgs) {
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        // Use base config if provided, otherwise discover per-file config
        let file_result = if let Some(config) = base_config {
            process_single_file(path, config, args)
        } else {
            match build_config(args, Some(path)) {
                Ok(config) => process_single_file(path, &config, args),
                Err(e) => Err(e),
            }
        };

        match file_result {
            Ok(()) => {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                eprintln!("Error reindenting {}: {}", path.display(), e);
            }
        }
    });

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    if !args.silent {
        if errors == 0 {
            eprintln!("Reindented {success} files successfully.");
        } else {
            eprintln!("Reindented {success} files, {errors} errors.");
        }
    }
}

/// Process a single file
fn process_single_file(path: &PathBuf, config: &Config, args: &CliArgs) -> Result<()> {
    // Check file size BEFORE reading to prevent memory exhaustion
    let metadata = std::fs::metadata(path)?;
    let file_size = metadata.len();
    if file_size > DEFAULT_MAX_FILE_SIZE {
        if !args.silent {
            let size_mb = file_size / (1024 * 1024);
            let limit_mb = DEFAULT_MAX_FILE_SIZE / (1024 * 1024);
            eprintln!(
                "Skipping {} ({} MB exceeds limit of {} MB)",
                path.display(),
                size_mb,
                limit_mb
            );
        }
        return Ok(());
    }

    // Syntax priority: CLI flag, then config file, then file extension
    let syntax = args.syntax.or(config.syntax).or_else(|| {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Syntax::from_extension)
    });
    let Some(syntax) = syntax else {
        if !args.silent {
            eprintln!("Skipping {} (unrecognized extension)", path.display());
        }
        return Ok(());
    };

    // Read input file into memory
    let mut file_contents = Vec::new();
    File::open(path)?.read_to_end(&mut file_contents)?;

    if !args.silent && !args.stdout {
        eprintln!("Reindenting: {}", path.display());
    }

    // Reindent the file
    let reader = BufReader::new(Cursor::new(&file_contents));
    let mut output = Vec::new();
    reindent_stream(reader, &mut output, config, syntax)?;

    // Output results
    if args.stdout {
        io::stdout().write_all(&output)?;
    } else {
        // Write back to file (in-place)
        std::fs::write(path, &output)?;
    }

    Ok(())
}

/// Process input from stdin, output to stdout
fn process_stdin(config: &Config, args: &CliArgs) -> Result<()> {
    // Read all input from stdin
    let mut stdin_contents = Vec::new();
    io::stdin().read_to_end(&mut stdin_contents)?;

    // Check size after reading to prevent processing extremely large input
    #[allow(clippy::cast_possible_truncation)]
    let stdin_size = stdin_contents.len() as u64;
    if stdin_size > DEFAULT_MAX_FILE_SIZE {
        anyhow::bail!(
            "stdin input too large ({} MB exceeds limit of {} MB)",
            stdin_size / (1024 * 1024),
            DEFAULT_MAX_FILE_SIZE / (1024 * 1024)
        );
    }

    // With no file extension to go on, default to script syntax
    let syntax = args
        .syntax
        .or(config.syntax)
        .unwrap_or(Syntax::Script);

    // Reindent the input
    let reader = BufReader::new(Cursor::new(&stdin_contents));
    let mut output = Vec::new();
    reindent_stream(reader, &mut output, config, syntax)?;

    // Always output to stdout when reading from stdin
    io::stdout().write_all(&output)?;

    if !args.silent {
        eprintln!("Reindented stdin successfully.");
    }

    Ok(())
}

fn print_usage() {
    println!(
        "reindent v{} - leading-indentation corrector",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Rewrites the leading whitespace of each line in JavaScript, CSS, JSON,");
    println!("HTML and related sources so it reflects the nesting structure.");
    println!();
    println!("Usage:");
    println!("  reindent [OPTIONS] <FILE>...");
    println!("  reindent [OPTIONS] -r <DIRECTORY>");
    println!("  reindent [OPTIONS] -               # Read from stdin");
    println!("  cat file.js | reindent             # Pipe input");
    println!();
    println!("Examples:");
    println!("  reindent file.js                # Reindent single file in-place");
    println!("  reindent *.css                  # Reindent multiple files");
    println!("  reindent -r src/                # Recursively reindent directory");
    println!("  reindent --stdout file.html     # Output to stdout");
    println!("  reindent -i 2 file.js           # Use 2-space indent");
    println!("  reindent --tabs file.js         # Indent with tabs");
    println!("  reindent - < file.js            # Read from stdin, write to stdout");
    println!();
    println!("Options:");
    println!("  -i, --indent <NUM>              Spaces per indent level [default: 4]");
    println!("  -t, --tabs                      Indent with one tab per level");
    println!("      --syntax <SYNTAX>           Force syntax: script or markup");
    println!("  -r, --recursive                 Process directories recursively");
    println!("  -e, --exclude <PATTERN>         Exclude files/dirs matching pattern (repeatable)");
    println!("  -s, --stdout                    Output to stdout");
    println!("  -c, --config <FILE>             Config file path (overrides auto-discovery)");
    println!("  -j, --jobs <NUM>                Parallel jobs (0=auto, 1=sequential)");
    println!("  -D, --debug                     Enable debug output");
    println!("  -S, --silent                    Silent mode");
    println!("  -h, --help                      Print help");
    println!();
    println!("Script extensions: .js, .mjs, .cjs, .jsx, .ts, .css, .scss, .less, .json");
    println!("Markup extensions: .html, .htm, .xhtml, .xml, .svg, .vue");
    println!();
    println!("Config file auto-discovery:");
    println!("  Searches for reindent.toml in parent directories");
    println!("  starting from the file being reindented up to the root directory.");
    println!("  Also checks reindent.toml in the home directory.");
    println!("  More specific configs (closer to file) override less specific ones.");
}
