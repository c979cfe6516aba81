use vgtree::Expansion;

fn main() {
    let root = std::env::args().nth(1).unwrap_or_else(|| ".".to_owned());
    let expansion = Expansion::open(&root);

    for label in expansion.voicegroups() {
        match vgtree::resolve(&label, &expansion) {
            Ok(tree) => eprintln!("{}: {} voices", label, tree.voices().len()),
            Err(err) => eprintln!("{}: {}", label, err),
        }
    }
}
