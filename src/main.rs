use std::path::Path;

use ansi_term::Style;
use color_eyre::eyre::{eyre, Result};
use structopt::StructOpt;

use vgtree::colors::{BLUE, CYAN, RED, WHITE};
use vgtree::{Expansion, JsonGenerationOptions, VoiceNode};

#[derive(Debug, StructOpt)]
enum VgtreeCommand {
    #[structopt(name = "json", about = "Resolve a voicegroup to its JSON tree.")]
    Json {
        #[structopt(help = "Path to the expansion checkout.")]
        root: String,

        #[structopt(help = "Voicegroup label to resolve, e.g. voicegroup164.")]
        label: String,

        #[structopt(short = "p", long = "pretty", help = "Pretty-print the JSON output.")]
        pretty: bool,

        #[structopt(
            short = "o",
            long = "output",
            help = "Output file, or stdout if not specified."
        )]
        output: Option<String>,
    },

    #[structopt(
        name = "tree",
        about = "Resolve a voicegroup and print it as an indented tree."
    )]
    Tree {
        #[structopt(help = "Path to the expansion checkout.")]
        root: String,

        #[structopt(help = "Voicegroup label to resolve, e.g. voicegroup164.")]
        label: String,
    },

    #[structopt(name = "list", about = "List the voicegroups in an expansion checkout.")]
    List {
        #[structopt(help = "Path to the expansion checkout.")]
        root: String,
    },
}

fn main() {
    let command = VgtreeCommand::from_args();

    if let Err(err) = run_command(command) {
        eprintln!("{}", err);
        log(RED, "error:", "Command failed.");
        std::process::exit(1)
    }
}

fn log(color: Style, prefix: &str, message: &str) {
    eprintln!("{} {}", color.paint(prefix), WHITE.paint(message));
}

fn run_command(command: VgtreeCommand) -> Result<()> {
    match command {
        VgtreeCommand::Json {
            root,
            label,
            pretty,
            output,
        } => {
            let expansion = Expansion::open(&root);
            let tree = vgtree::resolve(&label, &expansion)?;
            let json =
                vgtree::json_generation::generate_json(&tree, &JsonGenerationOptions { pretty });

            write_text(&json, output)
        }

        VgtreeCommand::Tree { root, label } => {
            let expansion = Expansion::open(&root);
            let tree = vgtree::resolve(&label, &expansion)?;

            print_tree(&tree, 0);

            Ok(())
        }

        VgtreeCommand::List { root } => {
            let expansion = Expansion::open(&root);
            let labels = expansion.voicegroups();

            if labels.is_empty() {
                return Err(eyre!(
                    "No voicegroups found under `{}`.",
                    expansion.root().display()
                ));
            }

            log(
                CYAN,
                "Found",
                &format!(
                    "{} voicegroups, {} direct sound samples, {} programmable wave samples.",
                    labels.len(),
                    expansion.direct_sound().len(),
                    expansion.programmable_wave().len()
                ),
            );

            for label in &labels {
                println!("{}", label);
            }

            Ok(())
        }
    }
}

fn print_tree(voice: &VoiceNode, depth: usize) {
    match voice {
        VoiceNode::Group { label, voices } => {
            println!("{}{}", pad(depth), CYAN.paint(label.as_str()));

            for (slot, child) in voices.iter().enumerate() {
                print_slot(slot, child, depth + 1);
            }
        }

        _ => print_slot(0, voice, depth),
    }
}

fn print_slot(slot: usize, voice: &VoiceNode, depth: usize) {
    let indent = pad(depth);
    let number = BLUE.paint(format!("[{:03}]", slot + 1));
    let kind = WHITE.paint(voice.readable_type());

    match voice {
        VoiceNode::Group { .. } => print_tree(voice, depth),

        VoiceNode::Keysplit {
            target,
            params,
            voices,
        } => {
            println!(
                "{}{} {} {} ({})",
                indent,
                number,
                kind,
                CYAN.paint(target.as_str()),
                params.join(", ")
            );

            for (slot, child) in voices.iter().enumerate() {
                print_slot(slot, child, depth + 1);
            }
        }

        VoiceNode::DirectSound {
            symbol, asset_path, ..
        }
        | VoiceNode::ProgrammableWave {
            symbol, asset_path, ..
        } => {
            let symbol = symbol.as_deref().unwrap_or("(no sample)");

            match asset_path {
                Some(path) => println!(
                    "{}{} {} {} -> {}",
                    indent,
                    number,
                    kind,
                    symbol,
                    path.display()
                ),
                None => println!("{}{} {} {}", indent, number, kind, symbol),
            }
        }

        VoiceNode::Unknown { raw, .. } => {
            println!("{}{} {} {}", indent, number, RED.paint("Unknown"), raw);
        }

        _ => println!("{}{} {} ({})", indent, number, kind, voice.params().join(", ")),
    }
}

fn pad(depth: usize) -> String {
    "    ".repeat(depth)
}

fn write_text<P>(content: &str, output: Option<P>) -> Result<()>
where
    P: AsRef<Path>,
{
    use std::fs::File;
    use std::io::Write;

    if let Some(filename) = output {
        writeln!(File::create(filename.as_ref())?, "{}", content)?;
    } else {
        println!("{}", content);
    }

    Ok(())
}
