use std::collections::hash_map::{Iter, Values};
use std::collections::HashMap;
use std::fmt::Debug;
use std::rc::Rc;

use crate::models::{HasAliases, HasName};
use crate::Error;

/// A list of things with aliases
///
/// This structure holds the reference data the interpreter resolves names against, such as
/// currencies, which can be looked up either by name or by any of their aliases.
///
/// It provides methods for:
/// - Adding new elements to the list
/// - Adding new aliases to existing elements
/// - Retrieving elements, ignoring case
#[derive(Debug, Clone)]
pub struct List<T> {
    aliases: HashMap<String, String>,
    list: HashMap<String, Rc<T>>,
}

impl<T: HasName + HasAliases + Debug> List<T> {
    pub fn new() -> Self {
        let aliases: HashMap<String, String> = HashMap::new();
        let list: HashMap<String, Rc<T>> = HashMap::new();
        List { aliases, list }
    }

    /// Inserts an ```element``` in the list, together with its aliases
    ///
    /// Inserting an element whose name is already there does nothing.
    pub fn insert(&mut self, element: T) -> Result<(), Error> {
        // Change the name which will be used as key to lowercase
        let name = element.get_name().to_lowercase();
        if self.list.contains_key(&name) {
            return Ok(());
        }
        for alias in element.get_aliases().iter() {
            self.add_alias(alias.to_string(), &element)?;
        }
        self.list.insert(name, Rc::new(element));
        Ok(())
    }

    /// Add an alias
    pub fn add_alias(&mut self, alias: String, for_element: &T) -> Result<(), Error> {
        match self.aliases.get(&alias.to_lowercase()) {
            Some(x) if *x != for_element.get_name().to_lowercase() => Err(Error::new(
                format!(
                    "Repeated alias {} for {} and {}",
                    alias,
                    for_element.get_name(),
                    x
                )
                .as_str(),
            )),
            _ => {
                self.aliases
                    .insert(alias.to_lowercase(), for_element.get_name().to_lowercase());
                Ok(())
            }
        }
    }

    pub fn get(&self, index: &str) -> Option<&Rc<T>> {
        let key = index.trim().to_lowercase();
        match self.list.get(&key) {
            Some(x) => Some(x),
            None => self.aliases.get(&key).and_then(|x| self.list.get(x)),
        }
    }

    pub fn iter(&self) -> Iter<'_, String, Rc<T>> {
        self.list.iter()
    }
    pub fn values(&self) -> Values<'_, String, Rc<T>> {
        self.list.values()
    }
    pub fn len(&self) -> usize {
        self.list.len()
    }
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
    pub fn len_alias(&self) -> usize {
        self.aliases.len() + self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use std::collections::HashSet;

    #[test]
    fn list() {
        let mut eur = Currency::new("EUR", "Euro");
        eur.set_aliases(vec!["€".to_string()].into_iter().collect::<HashSet<String>>());
        let mut list: List<Currency> = List::new();
        list.insert(eur.clone()).unwrap();
        list.insert(eur.clone()).unwrap();
        list.insert(Currency::new("usd", "US Dollar")).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.len_alias(), 3);
        assert_eq!(list.get("eur").unwrap().as_ref(), &eur);
        assert_eq!(list.get("€").unwrap().as_ref(), &eur);
        assert_eq!(list.get(" USD ").unwrap().get_code(), "USD");

        // Now add and alias
        list.add_alias("euro".to_string(), &eur).unwrap();
        assert_eq!(list.len_alias(), 4);
        assert_eq!(list.get("EURO").unwrap(), list.get("€").unwrap());

        // Retrieve an element that is not in the list
        assert!(list.get("Warner").is_none());
    }

    #[test]
    fn repeated_alias() {
        let mut list: List<Currency> = List::new();
        let usd = Currency::new("USD", "US Dollar");
        let aud = Currency::new("AUD", "Australian Dollar");
        list.insert(usd.clone()).unwrap();
        list.insert(aud.clone()).unwrap();
        list.add_alias("$".to_string(), &usd).unwrap();
        // Same alias, same element: fine
        list.add_alias("$".to_string(), &usd).unwrap();
        assert!(list.add_alias("$".to_string(), &aud).is_err());
    }
}
