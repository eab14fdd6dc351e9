//! Rails project parsing
//!
//! Reads columns from `db/schema.rb` and associations from the model
//! classes under `app/models`, and serves them as a model descriptor.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use type_helper::descriptor::ModelDescriptor;
use type_helper::ir::{Association, Cardinality, Column, ScalarType};
use type_helper::{ModelError, naming};

/// Errors raised while reading a Rails project
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// A model class found under `app/models`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Class name (e.g., "Post")
    pub name: String,
    /// Backing table (from `self.table_name` or the pluralized class name)
    pub table_name: String,
    /// Parent class (e.g., "ApplicationRecord", or "User" for an STI subclass)
    pub superclass: Option<String>,
    /// Associations in declaration order
    pub associations: Vec<Association>,
}

/// Models and tables of a Rails project
#[derive(Debug, Clone, Default)]
pub struct RailsProject {
    tables: HashMap<String, Vec<Column>>,
    models: HashMap<String, ModelInfo>,
}

impl RailsProject {
    /// Build a project from parsed tables and models
    pub fn new(tables: HashMap<String, Vec<Column>>, models: Vec<ModelInfo>) -> Self {
        Self {
            tables,
            models: models
                .into_iter()
                .map(|model| (model.name.clone(), model))
                .collect(),
        }
    }

    /// Number of model classes found
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    fn model(&self, entity: &str) -> Result<&ModelInfo, ModelError> {
        self.models
            .get(entity)
            .ok_or_else(|| ModelError::NotFound(entity.to_string()))
    }

    /// The model followed by its parsed ancestors, nearest first
    ///
    /// Single-table inheritance subclasses share their ancestor's table and
    /// inherit its associations.
    fn ancestry<'a>(&'a self, model: &'a ModelInfo) -> Result<Vec<&'a ModelInfo>, ModelError> {
        let mut chain = vec![model];
        let mut current = model;
        while let Some(parent) = current
            .superclass
            .as_deref()
            .and_then(|name| self.models.get(name))
        {
            if chain.iter().any(|seen| seen.name == parent.name) {
                return Err(ModelError::Unreadable {
                    name: model.name.clone(),
                    message: format!("circular inheritance through {}", parent.name),
                });
            }
            chain.push(parent);
            current = parent;
        }
        Ok(chain)
    }
}

impl ModelDescriptor for RailsProject {
    fn columns(&self, entity: &str) -> Result<Vec<Column>, ModelError> {
        let model = self.model(entity)?;
        self.ancestry(model)?
            .into_iter()
            .find_map(|owner| self.tables.get(&owner.table_name))
            .cloned()
            .ok_or_else(|| {
                tracing::warn!(entity, table = %model.table_name, "no table in schema");
                ModelError::NotFound(entity.to_string())
            })
    }

    fn associations(&self, entity: &str) -> Result<Vec<Association>, ModelError> {
        let model = self.model(entity)?;
        let chain = self.ancestry(model)?;
        Ok(chain
            .iter()
            .rev()
            .flat_map(|owner| owner.associations.iter().cloned())
            .collect())
    }
}

/// Load a project from its schema file and models directory
pub fn load(schema: &Path, models_dir: &Path) -> Result<RailsProject, ParseError> {
    let content = read(schema)?;
    let tables = parse_schema(&content).map_err(|(line, message)| ParseError::Syntax {
        path: schema.to_path_buf(),
        line,
        message,
    })?;

    let mut files = Vec::new();
    collect_ruby_files(models_dir, &mut files)?;
    files.sort();

    let mut models = Vec::new();
    for file in &files {
        models.extend(parse_models(&read(file)?));
    }

    tracing::debug!(
        tables = tables.len(),
        models = models.len(),
        "loaded Rails project"
    );

    Ok(RailsProject::new(tables, models))
}

fn read(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Recursively collect `.rb` files
fn collect_ruby_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ParseError> {
    let io_error = |source| ParseError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            collect_ruby_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "rb") {
            files.push(path);
        }
    }
    Ok(())
}

/// Parse the `create_table` blocks of a schema file
///
/// Errors carry the 1-based line number.
pub fn parse_schema(content: &str) -> Result<HashMap<String, Vec<Column>>, (usize, String)> {
    let mut tables = HashMap::new();
    let mut current: Option<(String, Vec<Column>)> = None;
    let mut opened_at = 0;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("create_table ") {
            if current.is_some() {
                return Err((index + 1, "nested create_table".to_string()));
            }
            let name = extract_quoted_string(rest)
                .ok_or_else(|| (index + 1, "create_table without a table name".to_string()))?;

            let mut columns = Vec::new();
            if let Some(id_type) = primary_key_type(rest) {
                columns.push(Column::new("id", id_type));
            }
            current = Some((name, columns));
            opened_at = index + 1;
            continue;
        }

        if line == "end" {
            if let Some((name, columns)) = current.take() {
                tables.insert(name, columns);
            }
            continue;
        }

        if let (Some(rest), Some((_, columns))) = (line.strip_prefix("t."), current.as_mut()) {
            columns.extend(parse_column(rest));
        }
    }

    if current.is_some() {
        return Err((opened_at, "create_table without end".to_string()));
    }

    Ok(tables)
}

/// Type of the implicit primary key, or None for `id: false`
fn primary_key_type(options: &str) -> Option<ScalarType> {
    let Some(start) = options.find("id:") else {
        return Some(ScalarType::Integer);
    };
    // `id:` must be its own option, not the tail of e.g. `uuid:`
    if start > 0 && !options[..start].ends_with([' ', ',']) {
        return Some(ScalarType::Integer);
    }

    let value = options[start + 3..]
        .trim_start()
        .split([',', ' '])
        .next()
        .unwrap_or("");

    match value {
        "false" => None,
        symbol => Some(ScalarType::parse(symbol.trim_start_matches(':'))),
    }
}

/// Parse a `t.<type> "<name>"` line (without the `t.` prefix)
fn parse_column(line: &str) -> Vec<Column> {
    let type_name = line
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or("");

    match type_name {
        "index" | "check_constraint" | "foreign_key" => Vec::new(),
        "timestamps" => vec![
            Column::new("created_at", ScalarType::Datetime),
            Column::new("updated_at", ScalarType::Datetime),
        ],
        "references" | "belongs_to" => extract_quoted_string(line)
            .map(|name| vec![Column::new(format!("{name}_id"), ScalarType::Integer)])
            .unwrap_or_default(),
        _ => extract_quoted_string(line)
            .map(|name| vec![Column::new(name, ScalarType::parse(type_name))])
            .unwrap_or_default(),
    }
}

/// Parse the model classes of a Ruby source file
pub fn parse_models(content: &str) -> Vec<ModelInfo> {
    let mut models: Vec<ModelInfo> = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("class ") {
            let name = rest
                .split(|c: char| c.is_whitespace() || c == '<')
                .next()
                .unwrap_or("");
            if name.is_empty() || name.starts_with('<') {
                continue;
            }
            let superclass = rest
                .split_once('<')
                .and_then(|(_, parent)| parent.split_whitespace().next())
                .map(|parent| parent.trim_end_matches(';'))
                .filter(|parent| !parent.is_empty())
                .map(str::to_string);
            models.push(ModelInfo {
                name: name.to_string(),
                table_name: naming::table_name(name),
                superclass,
                associations: Vec::new(),
            });
            continue;
        }

        let Some(model) = models.last_mut() else {
            continue;
        };

        if let Some(rest) = line.strip_prefix("self.table_name") {
            if let Some(table_name) = extract_quoted_string(rest) {
                model.table_name = table_name;
            }
            continue;
        }

        if let Some(association) = parse_association(line) {
            model.associations.push(association);
        }
    }

    models
}

/// Parse an association macro line such as `has_many :comments, class_name: "Note"`
fn parse_association(line: &str) -> Option<Association> {
    let (macro_name, rest) = line.split_once(|c: char| c.is_whitespace() || c == '(')?;
    let cardinality = Cardinality::from_macro(macro_name)?;

    let name = rest
        .trim_start()
        .strip_prefix(':')?
        .split(|c: char| c == ',' || c == ')' || c.is_whitespace())
        .next()?;
    if name.is_empty() {
        return None;
    }

    let class_name = rest
        .find("class_name")
        .and_then(|start| extract_quoted_string(&rest[start..]));

    Some(Association {
        name: name.to_string(),
        cardinality,
        class_name,
    })
}

/// Extract the first single- or double-quoted string from text
fn extract_quoted_string(text: &str) -> Option<String> {
    let start = text.find(['"', '\''])?;
    let quote = &text[start..start + 1];
    let rest = &text[start + 1..];
    let end = rest.find(quote)?;
    Some(rest[..end].to_string())
}
