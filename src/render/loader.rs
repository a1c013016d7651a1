//! Lazy template loading from the search root.
//!
//! Templates are read on first use, so only the fragment being rendered and
//! the templates it actually reaches through `extends`, `include` and
//! `import` are parsed. A broken template elsewhere in the directory, or one
//! only mentioned inside a `{# comment #}` or `{% raw %}` block, never
//! affects an unrelated fragment.

use super::RenderError;
use minijinja::{AutoEscape, Environment, UndefinedBehavior, context, path_loader};
use std::path::Path;

/// Template environment rooted at the fragment directory.
#[derive(Debug)]
pub struct TemplateLoader {
    env: Environment<'static>,
}

impl TemplateLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(root.as_ref().to_path_buf()));
        // Undefined names render empty, `{{ page.title }}` included
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        // Pages must come out byte-for-byte when there is nothing to substitute
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        Self { env }
    }

    /// Render `name` against an empty context.
    ///
    /// Missing templates, syntax errors and a missing parent all surface as
    /// `RenderError::Template` for `name`.
    pub fn render(&self, name: &str) -> Result<String, RenderError> {
        let template_err = |source| RenderError::Template {
            name: name.to_owned(),
            source,
        };

        self.env
            .get_template(name)
            .and_then(|template| template.render(context! {}))
            .map_err(template_err)
    }
}
