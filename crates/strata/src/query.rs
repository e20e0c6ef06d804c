//! The query descriptor: an immutable description of which rows an
//! operation on a table applies to.

use strata_core::{
    driver::{QueryFilter, SpatialFilter},
    geometry::{Geometry, SpatialReference, SpatialRelationship},
    Mapping,
};

/// Predicates, sort keys and a spatial filter accumulated by the builder
/// methods of [`FeatureClass`](crate::FeatureClass).
///
/// Every builder method returns a new descriptor and leaves `self`
/// untouched, so a descriptor can be shared and extended in several
/// directions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Parenthesized predicates, joined with `AND`.
    where_clauses: Vec<String>,

    /// Physical sort keys in priority order.
    order_by: Vec<SortKey>,

    spatial_filter: Option<SpatialFilter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

impl Query {
    pub fn new() -> Query {
        Query::default()
    }

    pub fn where_clauses(&self) -> &[String] {
        &self.where_clauses
    }

    pub fn sort_keys(&self) -> &[SortKey] {
        &self.order_by
    }

    pub fn spatial_filter(&self) -> Option<&SpatialFilter> {
        self.spatial_filter.as_ref()
    }

    /// Adds a predicate written in the store's own language.
    pub fn filter_by(&self, predicate: &str) -> Query {
        let mut query = self.clone();
        query.where_clauses.push(format!("({predicate})"));
        query
    }

    /// Restricts rows to those whose shape relates to `geometry`. Replaces
    /// any earlier spatial filter.
    pub fn filter_by_spatial(
        &self,
        geometry: Geometry,
        relationship: SpatialRelationship,
    ) -> Query {
        let mut query = self.clone();
        query.spatial_filter = Some(SpatialFilter {
            geometry,
            relationship,
        });
        query
    }

    /// Appends a sort key; earlier keys take priority.
    pub fn order_by(&self, field: &str, descending: bool) -> Query {
        let mut query = self.clone();
        query.order_by.push(SortKey {
            field: field.to_string(),
            descending,
        });
        query
    }

    /// The filter a search runs with: every mapped column, the predicates,
    /// the sort keys and the spatial filter.
    pub fn compose_read_filter(
        &self,
        mapping: &Mapping,
        output_spatial_reference: Option<SpatialReference>,
    ) -> QueryFilter {
        QueryFilter {
            sub_fields: mapping
                .projection()
                .into_iter()
                .map(str::to_string)
                .collect(),
            where_clause: self.where_clause(),
            postfix_clause: self.postfix_clause(),
            spatial_filter: self.spatial_filter.clone(),
            output_spatial_reference,
        }
    }

    /// The filter a bulk delete runs with. Sorting and projection do not
    /// apply to deletes.
    pub fn compose_delete_filter(&self) -> QueryFilter {
        QueryFilter {
            where_clause: self.where_clause(),
            spatial_filter: self.spatial_filter.clone(),
            ..QueryFilter::default()
        }
    }

    fn where_clause(&self) -> String {
        self.where_clauses.join(" AND ")
    }

    fn postfix_clause(&self) -> Option<String> {
        if self.order_by.is_empty() {
            return None;
        }

        let keys = self
            .order_by
            .iter()
            .map(|key| {
                if key.descending {
                    format!("{} DESC", key.field)
                } else {
                    key.field.clone()
                }
            })
            .collect::<Vec<_>>();

        Some(format!("ORDER BY {}", keys.join(",")))
    }
}
