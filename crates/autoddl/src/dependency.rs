//! Table ordering by foreign key dependencies.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::core::schema::{ForeignKeyInfo, SchemaDocument, TableDescriptor};
use crate::error::{DdlError, Result};

/// Orders tables so that every foreign key target is created before the
/// tables referencing it.
///
/// References to tables outside the input and self references do not
/// constrain the order. Tables without dependencies keep their input order.
#[derive(Debug)]
pub struct DependencyResolver<'a> {
    tables: &'a [TableDescriptor],
    /// Referencing table -> referenced tables, in foreign key order.
    depends_on: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(tables: &'a [TableDescriptor], foreign_keys: &'a [ForeignKeyInfo]) -> Self {
        let known: HashSet<&str> = tables.iter().map(|t| t.name.as_str()).collect();
        let mut depends_on: HashMap<&str, Vec<&str>> = HashMap::new();
        for fk in foreign_keys {
            let (from, to) = (fk.table_name.as_str(), fk.referenced_table.as_str());
            if from == to || !known.contains(from) || !known.contains(to) {
                continue;
            }
            let targets = depends_on.entry(from).or_default();
            if !targets.contains(&to) {
                targets.push(to);
            }
        }
        Self { tables, depends_on }
    }

    pub fn for_document(document: &'a SchemaDocument) -> Self {
        Self::new(&document.tables, &document.foreign_keys)
    }

    /// Tables in creation order (depth-first topological sort).
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::CircularDependency`] naming a table on the cycle.
    pub fn creation_order(&self) -> Result<Vec<&'a TableDescriptor>> {
        let by_name: HashMap<&str, &'a TableDescriptor> =
            self.tables.iter().map(|t| (t.name.as_str(), t)).collect();
        let mut visited = HashSet::new();
        let mut visiting = HashSet::new();
        let mut order = Vec::with_capacity(self.tables.len());

        for table in self.tables {
            self.visit(&table.name, &by_name, &mut visited, &mut visiting, &mut order)?;
        }
        debug!("Resolved creation order for {} tables", order.len());
        Ok(order)
    }

    /// Tables in deletion order: the reverse of [`Self::creation_order`].
    pub fn deletion_order(&self) -> Result<Vec<&'a TableDescriptor>> {
        let mut order = self.creation_order()?;
        order.reverse();
        Ok(order)
    }

    fn visit(
        &self,
        name: &str,
        by_name: &HashMap<&str, &'a TableDescriptor>,
        visited: &mut HashSet<String>,
        visiting: &mut HashSet<String>,
        order: &mut Vec<&'a TableDescriptor>,
    ) -> Result<()> {
        if visited.contains(name) {
            return Ok(());
        }
        if !visiting.insert(name.to_string()) {
            return Err(DdlError::CircularDependency(name.to_string()));
        }
        for target in self.depends_on.get(name).into_iter().flatten() {
            self.visit(target, by_name, visited, visiting, order)?;
        }
        visiting.remove(name);
        visited.insert(name.to_string());
        if let Some(table) = by_name.get(name) {
            order.push(*table);
        }
        Ok(())
    }
}
