use argh::FromArgs;
use std::{
    error::Error,
    fmt,
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};
use tstree::{
    tests_common::{generate_key_fixed_length, generate_keys_skewed, median_order},
    visitor::DotPrinter,
    TernarySearchTree,
};

#[derive(FromArgs)]
/// Build a ternary search tree and draw it.
struct TreeVizArgs {
    /// input to read words from, one per line (only used by the 'from-file'
    /// shape)
    #[argh(option)]
    input: Option<PathBuf>,

    /// output format, either 'dot' or 'text'
    #[argh(option, default = "Format::Dot")]
    format: Format,

    /// insert the words sorted (the default), or in 'median' order
    #[argh(option, default = "Order::Sorted")]
    order: Order,

    /// what shape of tree to generate: 'skewed', 'fixed-length', or
    /// 'from-file'
    #[argh(positional)]
    shape: TreeShape,

    /// how large the tree should be
    #[argh(positional, default = "4")]
    size: usize,

    /// where to output the tree diagram, defaults to stdout
    #[argh(option)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args: TreeVizArgs = argh::from_env();

    let mut words = args.shape.generate_words(args.size, args.input.as_ref())?;
    words.sort();
    words.dedup();
    if let Order::Median = args.order {
        words = median_order(&words);
    }

    let tree: TernarySearchTree = words.iter().collect();
    if tree.is_empty() {
        return Err(Box::new(EmptyTreeError));
    }

    tracing::info!(
        num_words = tree.size(),
        stats = %tree.stats(),
        "built tree"
    );

    match args.output {
        Some(path) => {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            write_tree(&mut BufWriter::new(file), &tree, args.format)?;
        },
        None => {
            let stdout = io::stdout();
            write_tree(&mut BufWriter::new(stdout.lock()), &tree, args.format)?;
        },
    }

    Ok(())
}

fn write_tree(
    output: &mut dyn Write,
    tree: &TernarySearchTree,
    format: Format,
) -> Result<(), Box<dyn Error>> {
    match format {
        Format::Dot => DotPrinter::print_tree(output, tree.root())?,
        Format::Text => {
            output.write_all(tree.render().as_bytes())?;
            output.flush()?;
        },
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Dot,
    Text,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(Format::Dot),
            "text" => Ok(Format::Text),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Order {
    Sorted,
    Median,
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sorted" => Ok(Order::Sorted),
            "median" => Ok(Order::Median),
            other => Err(format!("unknown insertion order '{other}'")),
        }
    }
}

#[derive(Debug)]
enum TreeShape {
    Skewed,
    FixedLength,
    FromFile,
}

impl TreeShape {
    fn generate_words(
        self,
        size: usize,
        input: Option<&PathBuf>,
    ) -> Result<Vec<String>, Box<dyn Error>> {
        match self {
            TreeShape::Skewed => Ok(generate_keys_skewed(size).collect()),
            TreeShape::FixedLength => {
                // `size` characters long, over a 3 letter alphabet
                Ok(generate_key_fixed_length(size, 3).collect())
            },
            TreeShape::FromFile => {
                let path = input.ok_or("the 'from-file' shape needs an --input file")?;
                read_words(File::open(path)?)
            },
        }
    }
}

fn read_words(file: File) -> Result<Vec<String>, Box<dyn Error>> {
    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(String::from(word));
        }
    }
    Ok(words)
}

impl FromStr for TreeShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skewed" => Ok(TreeShape::Skewed),
            "fixed-length" => Ok(TreeShape::FixedLength),
            "from-file" => Ok(TreeShape::FromFile),
            other => Err(format!("unknown tree shape '{other}'")),
        }
    }
}

#[derive(Debug)]
struct EmptyTreeError;

impl fmt::Display for EmptyTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree must have at least a single element to be output")
    }
}

impl Error for EmptyTreeError {}
