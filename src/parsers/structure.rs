//! Top-level structure extraction from an OXC program
//!
//! Only statements directly in the module body are inspected. Nested
//! declarations inside function or class bodies are not collected.

use oxc_ast::ast::*;

use crate::models::file_record::ClassRecord;

/// Imports, classes and functions declared at the top level of one file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileStructure {
    pub imports: Vec<String>,
    pub classes: Vec<ClassRecord>,
    pub functions: Vec<String>,
}

/// Single-pass collector over `Program::body`
pub struct StructureExtractor {
    structure: FileStructure,
}

impl StructureExtractor {
    /// Extract the structure of a parsed program
    pub fn extract(program: &Program<'_>) -> FileStructure {
        let mut extractor = Self {
            structure: FileStructure::default(),
        };
        extractor.visit_program(program);
        extractor.structure
    }

    fn visit_program(&mut self, program: &Program<'_>) {
        for stmt in &program.body {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement<'_>) {
        match stmt {
            Statement::ImportDeclaration(decl) => {
                self.structure.imports.push(decl.source.value.to_string());
            }
            Statement::TSImportEqualsDeclaration(decl) => {
                if let TSModuleReference::ExternalModuleReference(reference) = &decl.module_reference {
                    self.structure
                        .imports
                        .push(reference.expression.value.to_string());
                }
            }
            Statement::ClassDeclaration(class) => self.visit_class(class),
            Statement::FunctionDeclaration(func) => self.visit_function(func),
            // Export statements, including `export class` and `export function`, are not descended into.
            _ => {}
        }
    }

    fn visit_class(&mut self, class: &Class<'_>) {
        let Some(id) = &class.id else {
            return;
        };

        let bases = match &class.super_class {
            Some(Expression::Identifier(ident)) => vec![ident.name.to_string()],
            _ => Vec::new(),
        };

        let methods = class
            .body
            .body
            .iter()
            .filter_map(|element| match element {
                ClassElement::MethodDefinition(method) => method_name(method),
                _ => None,
            })
            .collect();

        self.structure.classes.push(ClassRecord {
            name: id.name.to_string(),
            bases,
            methods,
        });
    }

    fn visit_function(&mut self, func: &Function<'_>) {
        // Overload signatures and `declare function` have no body.
        if func.body.is_none() {
            return;
        }
        if let Some(id) = &func.id {
            self.structure.functions.push(id.name.to_string());
        }
    }
}

fn method_name(method: &MethodDefinition<'_>) -> Option<String> {
    if method.computed || method.value.body.is_none() {
        return None;
    }
    match &method.key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.to_string()),
        _ => None,
    }
}
