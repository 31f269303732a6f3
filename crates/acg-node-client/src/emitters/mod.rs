pub mod client;
pub mod jsdoc;
pub mod readme;

use minijinja::Environment;

/// Build the template environment shared by the emitters.
pub fn template_env() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "client_header.js.j2",
        include_str!("../../templates/client_header.js.j2"),
    )
    .expect("template should be valid");
    env.add_template("method.js.j2", include_str!("../../templates/method.js.j2"))
        .expect("template should be valid");
    env.add_template("readme.md.j2", include_str!("../../templates/readme.md.j2"))
        .expect("template should be valid");
    env
}
