use std::collections::HashSet;

use contour::{
    bind, get_help_text, ArgumentBinding, ArgumentDescriptor, ArgumentsDescriptor, Collection,
    CommandBindings, CommandDescriptor, ConverterRegistry, Custom, HelpRenderer, Metadata,
    OptionBinding, OptionDescriptor, Optional, ParseResult, Positional, RemainderBinding, Scalar,
    Scope, Switch,
};

macro_rules! assert_contains {
    ($base:expr, $sub:expr) => {
        assert!(
            $base.contains($sub),
            "'{b}' does not contain '{s}'",
            b = $base,
            s = $sub,
        );
    };
}

macro_rules! assert_not_contains {
    ($base:expr, $sub:expr) => {
        assert!(
            !$base.contains($sub),
            "'{b}' must not contain '{s}'",
            b = $base,
            s = $sub,
        );
    };
}

/// Descriptor table mirroring a small `git`-like tool: three global options,
/// two top-level commands, and a `remote` group with two commands.
fn git_metadata() -> Metadata {
    let mut meta = Metadata::new("git", "the powerful SCM tool");
    meta.global_option(
        OptionDescriptor::new(Scope::Global, ["--global"])
            .arity(0)
            .description("run in global mode"),
    );
    meta.global_option(
        OptionDescriptor::new(Scope::Global, ["-g1", "--global1"])
            .description("a single-valued global option"),
    );
    meta.global_option(
        OptionDescriptor::new(Scope::Global, ["-g2", "--global2"])
            .arity(2)
            .description("a two-valued global option"),
    );
    meta.global_option(
        OptionDescriptor::new(Scope::Global, ["--trace"])
            .arity(0)
            .hidden()
            .description("developer tracing"),
    );

    meta.command(
        CommandDescriptor::new("add").description("add file contents to the index"),
        None,
    );
    meta.command(
        CommandDescriptor::new("reset").description("reset current HEAD"),
        None,
    );
    meta.command(
        CommandDescriptor::new("remote-add").description("add a remote"),
        Some("remote"),
    );
    meta.command(
        CommandDescriptor::new("remote-remove").description("remove a remote"),
        Some("remote"),
    );
    meta.help_keyword("help");

    meta.command_option(
        "remote-add",
        OptionDescriptor::new(Scope::Group, ["-v", "--verbose"])
            .arity(0)
            .description("be chatty about remotes"),
    );
    meta.command_option(
        "remote-add",
        OptionDescriptor::new(Scope::Command, ["-t", "--track"])
            .description("branch to track"),
    );
    meta.command_argument(
        "remote-add",
        Positional::Ordered(
            ArgumentDescriptor::new(0)
                .required()
                .title("name")
                .description("the remote name"),
        ),
    );
    meta.command_argument(
        "remote-add",
        Positional::Remainder(ArgumentsDescriptor::new().title("urls").description("remote urls")),
    );

    meta
}

/// Simulated tokenizer output for:
/// `git -g1 alpha --global remote-add -v -t main origin url1 url2`
fn remote_add_result() -> ParseResult {
    let mut result = ParseResult::default();
    result.group.replace("remote".to_string());
    result.command.replace("remote-add".to_string());
    result.global_options.push("-g1", "alpha");
    result.global_options.push("--global", "");
    result.group_options.push("-v", "");
    result.command_options.push("-t", "main");
    result.argument("origin");
    result.argument("url1");
    result.argument("url2");
    result
}

#[test]
fn bind_remote_add_invocation() {
    // Setup
    let mut global: bool = false;
    let mut global1: Option<String> = None;
    let mut verbose: bool = false;
    let mut track: String = String::default();
    let mut name: String = String::default();
    let mut urls: Vec<String> = Vec::default();

    let mut bindings = CommandBindings::default();
    bindings
        .option(OptionBinding::new(
            OptionDescriptor::new(Scope::Global, ["--global"]).arity(0),
            Switch::new(&mut global, true),
        ))
        .option(OptionBinding::new(
            OptionDescriptor::new(Scope::Global, ["-g1", "--global1"]),
            Optional::new(&mut global1),
        ))
        .option(OptionBinding::new(
            OptionDescriptor::new(Scope::Group, ["-v", "--verbose"]).arity(0),
            Switch::new(&mut verbose, true),
        ))
        .option(OptionBinding::new(
            OptionDescriptor::new(Scope::Command, ["-t", "--track"]),
            Scalar::new(&mut track),
        ))
        .argument(ArgumentBinding::new(
            ArgumentDescriptor::new(0).required().title("name"),
            Scalar::new(&mut name),
        ))
        .remainder(RemainderBinding::new(
            ArgumentsDescriptor::new().title("urls"),
            Collection::new(&mut urls),
        ));

    // Execute
    bind(bindings, &remote_add_result(), &ConverterRegistry::default()).unwrap();

    // Verify
    assert!(global);
    assert_eq!(global1, Some("alpha".to_string()));
    assert!(verbose);
    assert_eq!(track, "main");
    assert_eq!(name, "origin");
    assert_eq!(urls, vec!["url1".to_string(), "url2".to_string()]);
}

#[test]
fn bind_multi_value_global_into_set() {
    // Setup
    let mut exclusions: HashSet<u32> = HashSet::default();
    let mut bindings = CommandBindings::default();
    bindings.option(OptionBinding::new(
        OptionDescriptor::new(Scope::Global, ["-g2", "--global2"]).arity(2),
        Collection::new(&mut exclusions),
    ));
    let mut result = ParseResult::default();
    result.global_options.push("-g2", "3");
    result.global_options.push("--global2", "5");

    // Execute
    bind(bindings, &result, &ConverterRegistry::default()).unwrap();

    // Verify
    assert_eq!(exclusions, HashSet::from([3, 5]));
}

#[derive(Debug, PartialEq, Default)]
enum Tide {
    #[default]
    Low,
    High,
}

#[test]
fn bind_with_registered_converter() {
    // Setup
    let mut registry = ConverterRegistry::default();
    registry.register::<Tide, _>(|token| match token {
        "low" => Ok(Tide::Low),
        "high" => Ok(Tide::High),
        _ => Err(format!("unknown tide: {token}")),
    });

    let mut tide = Tide::default();
    let mut bindings = CommandBindings::default();
    bindings.option(OptionBinding::new(
        OptionDescriptor::new(Scope::Command, ["--tide"]),
        Custom::new(&mut tide),
    ));
    let mut result = ParseResult::default();
    result.command_options.push("--tide", "high");

    // Execute
    bind(bindings, &result, &registry).unwrap();

    // Verify
    assert_eq!(tide, Tide::High);
}

#[test]
fn summary_help() {
    // Setup
    let meta = git_metadata();
    let result = ParseResult::default();

    // Execute
    // Wide enough that the usage line does not wrap mid-token.
    let text = HelpRenderer::with_width(&meta, &result, 120).help_text();

    // Verify
    assert_contains!(text, "git: the powerful SCM tool");
    assert_contains!(text, "Usage:");
    assert_contains!(text, "[--global]");
    assert_contains!(text, "[(-g1 | --global1) <arg>]");
    assert_contains!(text, "[(-g2 | --global2) <arg1> <arg2>]");
    assert_contains!(text, "<command>");
    assert_contains!(text, "add file contents to the index");
    assert_contains!(text, "reset current HEAD");
    // The hidden option binds but never renders.
    assert_not_contains!(text, "--trace");
    // The help keyword is synthetic; it takes no entry in the listing.
    assert_not_contains!(text, "\n    help");
}

#[test]
fn group_help() {
    // Setup
    let meta = git_metadata();
    let mut result = ParseResult::default();
    result.group.replace("remote".to_string());
    result.argument("remote");

    // Execute
    let text = get_help_text(&meta, &result);

    // Verify
    assert_contains!(text, "remote-add");
    assert_contains!(text, "remote-remove");
    assert_not_contains!(text, "reset");
    assert_not_contains!(text, "add file contents");
}

#[test]
fn focused_command_help() {
    // Setup
    let meta = git_metadata();
    let result = remote_add_result();

    // Execute
    let text = get_help_text(&meta, &result);

    // Verify
    assert_contains!(text, "-v, --verbose");
    assert_contains!(text, "-t, --track");
    assert_contains!(text, "Available arguments:");
    assert_contains!(text, "<name>");
    assert_contains!(text, "the remote name");
    assert_contains!(text, "<urls>");
}

#[test]
fn help_wraps_to_width() {
    // Setup
    let mut meta = Metadata::new("tool", "a tool");
    meta.global_option(OptionDescriptor::new(Scope::Global, ["--flag"]).description(
        "this description is deliberately much longer than forty columns so the renderer must wrap it",
    ));
    let result = ParseResult::default();

    // Execute
    let text = HelpRenderer::with_width(&meta, &result, 40).help_text();

    // Verify
    for line in text.split('\n') {
        assert!(line.len() <= 40, "'{line}' exceeds the wrap width");
    }
    assert_contains!(text, "deliberately");
}
