//! A content/layout template pairing backed by one compiled Tera instance.
//!
//! Compilation runs through an explicit state machine:
//!
//! ```text
//! Uninitialized ──render──▶ Initializing ──ok──▶ Ready(unit)
//!                                        └─err─▶ Failed(error)
//! ```
//!
//! Without hot reload the implicit compile on first render runs exactly once;
//! concurrent first callers wait on the transition and share its outcome. An
//! explicit [`Template::initialize`] always recompiles, and only a successful
//! compile replaces the active unit.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tera::{Context, Tera};

use crate::discovery::{derive_name, ensure_dir, files_with_extension, relative_name};
use crate::error::{Result, TempletError};
use crate::filters::register_builtin_filters;
use crate::layout::Layout;

/// Extension used when none (or an empty one) is configured.
pub const DEFAULT_EXTENSION: &str = ".html";

#[derive(Debug)]
enum InitState {
    Uninitialized,
    Initializing,
    Ready(Arc<CompiledUnit>),
    Failed(TempletError),
}

#[derive(Debug)]
struct CompiledUnit {
    tera: Tera,
    /// Template rendered by `render`: the layout entry, or the first content file.
    entry: String,
    layout: Option<Layout>,
}

/// Templates discovered under a content directory (and optional layout
/// directory), compiled together and rendered as one page.
#[derive(Debug)]
pub struct Template {
    name: String,
    content_dir: PathBuf,
    layout_dir: Option<PathBuf>,
    ext: String,
    hot_reload: bool,
    state: Mutex<InitState>,
    settled: Condvar,
    compilations: AtomicU64,
}

impl Template {
    /// A content-only template. Renders the first content file found.
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        let content_dir = content_dir.into();
        Self {
            name: derive_name(&content_dir),
            content_dir,
            layout_dir: None,
            ext: String::new(),
            hot_reload: false,
            state: Mutex::new(InitState::Uninitialized),
            settled: Condvar::new(),
            compilations: AtomicU64::new(0),
        }
    }

    /// A template in layout mode: the layout's entry file is rendered and
    /// pulls in templates defined in the content directory.
    pub fn with_layout(content_dir: impl Into<PathBuf>, layout_dir: impl Into<PathBuf>) -> Self {
        let mut template = Self::new(content_dir);
        let layout_dir = layout_dir.into();
        // An empty layout path means "no layout".
        if !layout_dir.as_os_str().is_empty() {
            template.layout_dir = Some(layout_dir);
        }
        template
    }

    /// Only files with this extension (leading `.` included) are compiled.
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }

    pub fn with_hot_reload(mut self, hot_reload: bool) -> Self {
        self.hot_reload = hot_reload;
        self
    }

    pub fn set_hot_reload(&mut self, hot_reload: bool) {
        self.hot_reload = hot_reload;
    }

    /// Derived name: the content directory's final path segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn layout_dir(&self) -> Option<&Path> {
        self.layout_dir.as_deref()
    }

    /// Derived layout name, if the template is in layout mode.
    pub fn layout_name(&self) -> Option<String> {
        self.layout_dir.as_deref().map(derive_name)
    }

    /// Layout discovered by the most recent successful compile.
    pub fn layout(&self) -> Option<Layout> {
        self.active().and_then(|unit| unit.layout.clone())
    }

    /// Effective extension filter.
    pub fn extension(&self) -> &str {
        if self.ext.is_empty() {
            DEFAULT_EXTENSION
        } else {
            &self.ext
        }
    }

    pub fn hot_reload(&self) -> bool {
        self.hot_reload
    }

    /// True once a compile has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.active().is_some()
    }

    /// Number of compile passes attempted, successful or not.
    pub fn compilations(&self) -> u64 {
        self.compilations.load(Ordering::Relaxed)
    }

    /// Names registered in the active compiled unit, sorted.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .active()
            .map(|unit| unit.tera.get_template_names().map(String::from).collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Validate directories, discover files, and compile them.
    ///
    /// Always recompiles. Calling this before the first render is optional
    /// but surfaces missing directories and syntax errors early. On failure the
    /// previously active unit (if any) stays in place.
    pub fn initialize(&self) -> Result<()> {
        let unit = Arc::new(self.compile()?);
        self.activate(unit);
        Ok(())
    }

    /// Render into `out` with `data` as the template context.
    ///
    /// `data` must serialize to an object, or to unit/`None` for an empty
    /// context. Compiles first when hot reload is on, or when no compile has
    /// been attempted yet. Output is written incrementally, so a failure can
    /// leave partial output behind.
    pub fn render<T, W>(&self, out: W, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        let context = self.context_from(data)?;
        self.render_context(out, &context)
    }

    /// Render into `out` with a prepared Tera context.
    pub fn render_context<W: Write>(&self, out: W, context: &Context) -> Result<()> {
        let unit = self.prepare()?;
        unit.tera
            .render_to(&unit.entry, context, out)
            .map_err(|e| TempletError::render(&self.name, e))
    }

    /// Render into a new `String`.
    pub fn render_to_string<T>(&self, data: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        let context = self.context_from(data)?;
        let unit = self.prepare()?;
        unit.tera
            .render(&unit.entry, &context)
            .map_err(|e| TempletError::render(&self.name, e))
    }

    fn prepare(&self) -> Result<Arc<CompiledUnit>> {
        if self.hot_reload {
            let unit = Arc::new(self.compile()?);
            self.activate(Arc::clone(&unit));
            Ok(unit)
        } else {
            self.ensure_compiled()
        }
    }

    fn ensure_compiled(&self) -> Result<Arc<CompiledUnit>> {
        let mut state = self
            .settled
            .wait_while(self.lock_state(), |s| matches!(s, InitState::Initializing))
            .unwrap_or_else(PoisonError::into_inner);

        match &*state {
            InitState::Ready(unit) => return Ok(Arc::clone(unit)),
            InitState::Failed(err) => return Err(err.clone()),
            InitState::Uninitialized | InitState::Initializing => {}
        }
        *state = InitState::Initializing;
        drop(state);

        let result = self.compile().map(Arc::new);

        let mut state = self.lock_state();
        match &result {
            Ok(unit) => *state = InitState::Ready(Arc::clone(unit)),
            // An explicit initialize may have landed while we compiled.
            Err(err) if matches!(*state, InitState::Initializing) => {
                *state = InitState::Failed(err.clone());
            }
            Err(_) => {}
        }
        self.settled.notify_all();
        result
    }

    fn activate(&self, unit: Arc<CompiledUnit>) {
        *self.lock_state() = InitState::Ready(unit);
        self.settled.notify_all();
    }

    fn active(&self) -> Option<Arc<CompiledUnit>> {
        match &*self.lock_state() {
            InitState::Ready(unit) => Some(Arc::clone(unit)),
            _ => None,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, InitState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn compile(&self) -> Result<CompiledUnit> {
        self.compilations.fetch_add(1, Ordering::Relaxed);
        let ext = self.extension();

        ensure_dir(&self.content_dir)?;
        let layout = match &self.layout_dir {
            Some(dir) => {
                ensure_dir(dir)?;
                Some(Layout::scan(dir, ext)?)
            }
            None => None,
        };

        let mut files: Vec<(PathBuf, Option<String>)> =
            files_with_extension(&self.content_dir, ext)?
                .into_iter()
                .map(|file| {
                    let name = relative_name(&self.content_dir, &file);
                    (file, Some(name))
                })
                .collect();

        let root = files.first().and_then(|(_, name)| name.clone());

        if let Some(layout) = &layout {
            files.extend(layout.files().iter().map(|file| {
                let name = relative_name(layout.dir(), file);
                (file.clone(), Some(name))
            }));
        }

        let entry = match (&layout, root) {
            (Some(layout), _) if !files.is_empty() => layout.entry().to_string(),
            (None, Some(root)) => root,
            _ => {
                return Err(TempletError::compile(
                    &self.name,
                    tera::Error::msg(format!(
                        "no '{ext}' files found under '{}'",
                        self.content_dir.display()
                    )),
                ))
            }
        };

        let file_count = files.len();
        let mut tera = Tera::default();
        // Escape every file, not only the `.html`/`.htm`/`.xml` names Tera
        // escapes by default.
        tera.autoescape_on(vec![""]);
        register_builtin_filters(&mut tera);
        tera.add_template_files(files)
            .map_err(|e| TempletError::compile(&self.name, e))?;

        tracing::debug!(
            name = %self.name,
            entry = %entry,
            files = file_count,
            layout = layout.as_ref().map(Layout::name),
            "Compiled template"
        );

        Ok(CompiledUnit {
            tera,
            entry,
            layout,
        })
    }

    fn context_from<T>(&self, data: &T) -> Result<Context>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(data)
            .map_err(|e| TempletError::render(&self.name, tera::Error::json(e)))?;

        match value {
            serde_json::Value::Null => Ok(Context::new()),
            serde_json::Value::Object(_) => {
                Context::from_value(value).map_err(|e| TempletError::render(&self.name, e))
            }
            other => Err(TempletError::render(
                &self.name,
                tera::Error::msg(format!("render data must be an object, got {other}")),
            )),
        }
    }
}
