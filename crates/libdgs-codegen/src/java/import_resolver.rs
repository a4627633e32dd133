use crate::java::ClassName;
use crate::java::JavaType;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashSet;

/// Decides, for one compilation unit, which referenced classes get imported
/// and which must be written out fully qualified.
///
/// Within each group of classes sharing a simple name exactly one class may
/// be referred to by that simple name. The type declared by the file always
/// owns its own simple name. Otherwise a same-package class wins, then a
/// `java.lang` class, then the class whose canonical name sorts first.
#[derive(Debug)]
pub(crate) struct ImportResolver {
    declared: ClassName,
    imports: Vec<ClassName>,
    by_simple_name: HashSet<ClassName>,
}
impl ImportResolver {
    pub fn new<'a>(
        declared: &ClassName,
        referenced: impl IntoIterator<Item = &'a ClassName>,
    ) -> Self {
        let mut groups: BTreeMap<&str, BTreeSet<(String, &ClassName)>> =
            BTreeMap::new();
        for class in referenced {
            if class == declared {
                continue;
            }
            groups
                .entry(class.simple_name())
                .or_default()
                .insert((class.canonical_name(), class));
        }

        let mut imports = vec![];
        let mut by_simple_name = HashSet::new();
        for (simple_name, classes) in groups {
            if simple_name == declared.simple_name() {
                continue;
            }

            let winner =
                classes.iter()
                    .find(|(_, class)| class.package() == declared.package())
                    .or_else(|| classes.iter().find(|(_, class)| {
                        class.is_implicitly_imported()
                    }))
                    .or_else(|| classes.first())
                    .map(|(_, class)| *class);

            if let Some(winner) = winner {
                if winner.package() != declared.package()
                    && !winner.is_implicitly_imported() {
                    imports.push(winner.to_owned());
                }
                by_simple_name.insert(winner.to_owned());
            }
        }
        imports.sort_by_key(|class| class.canonical_name());

        Self {
            declared: declared.to_owned(),
            imports,
            by_simple_name,
        }
    }

    pub fn imports(&self) -> &[ClassName] {
        self.imports.as_slice()
    }

    /// The name to write in source for `class`.
    pub fn class_name(&self, class: &ClassName) -> String {
        if class == &self.declared || self.by_simple_name.contains(class) {
            class.simple_name().to_string()
        } else {
            class.canonical_name()
        }
    }

    pub fn type_name(&self, java_type: &JavaType) -> String {
        match java_type {
            JavaType::Class(class) => self.class_name(class),
            JavaType::Primitive(primitive) => primitive.keyword().to_string(),
        }
    }
}
