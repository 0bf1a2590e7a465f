//! Product-category rankings: units sold and mean review score.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::OrderRecord;

/// Units sold per product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySalesRow {
    pub category: String,
    pub quantity: u64,
}

/// Mean review score per product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScoreRow {
    pub category: String,
    pub score: f64,
}

/// Sum item quantities per category, sorted descending.
///
/// The sort is stable, so categories with equal totals keep the order in
/// which they first appeared in the input.
pub fn compute_category_sales(records: &[OrderRecord]) -> Vec<CategorySalesRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CategorySalesRow> = Vec::new();

    for record in records {
        match index.get(record.product_category.as_str()) {
            Some(&i) => rows[i].quantity += u64::from(record.order_item_id),
            None => {
                index.insert(record.product_category.as_str(), rows.len());
                rows.push(CategorySalesRow {
                    category: record.product_category.clone(),
                    quantity: u64::from(record.order_item_id),
                });
            }
        }
    }

    rows.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    rows
}

/// Mean review score per category, sorted descending.
///
/// Unscored items are left out of the mean, mirroring how the review column
/// treats missing values elsewhere. A category with no scored items at all
/// reports NaN and sorts after every scored category.
pub fn compute_category_scores(records: &[OrderRecord]) -> Vec<CategoryScoreRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sums: Vec<(String, f64, usize)> = Vec::new();

    for record in records {
        let i = match index.get(record.product_category.as_str()) {
            Some(&i) => i,
            None => {
                index.insert(record.product_category.as_str(), sums.len());
                sums.push((record.product_category.clone(), 0.0, 0));
                sums.len() - 1
            }
        };
        if let Some(score) = record.review_score {
            sums[i].1 += score;
            sums[i].2 += 1;
        }
    }

    let mut rows: Vec<CategoryScoreRow> = sums
        .into_iter()
        .map(|(category, sum, count)| CategoryScoreRow {
            category,
            score: if count > 0 {
                sum / count as f64
            } else {
                f64::NAN
            },
        })
        .collect();

    // NaN means "no scored items"; it ranks below every real score. The
    // explicit arms keep the comparator a total order.
    rows.sort_by(|a, b| match (a.score.is_nan(), b.score.is_nan()) {
        (false, false) => b.score.total_cmp(&a.score),
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (true, true) => std::cmp::Ordering::Equal,
    });
    rows
}
