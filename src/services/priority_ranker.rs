use crate::enums::coverage_status::CoverageStatus;
use crate::enums::priority_mark::PriorityMark;
use crate::structs::category_coverage::CategoryMap;
use crate::structs::config::threshold_config::ThresholdConfig;
use crate::structs::coverage_ranking::CoverageRanking;
use crate::structs::ranked_category::RankedCategory;

pub struct PriorityRanker<'a> {
    priority_list: &'a [String],
    thresholds: &'a ThresholdConfig,
}

impl<'a> PriorityRanker<'a> {
    pub const fn new(priority_list: &'a [String], thresholds: &'a ThresholdConfig) -> Self {
        Self {
            priority_list,
            thresholds,
        }
    }

    /// Orders present categories by the priority list. Coverage never changes the order.
    pub fn rank(&self, categories: &CategoryMap) -> CoverageRanking {
        let entries: Vec<RankedCategory> = self
            .priority_list
            .iter()
            .enumerate()
            .filter_map(|(position, name)| {
                let category = categories.get(name)?;
                let improvement_files = if category.coverage < self.thresholds.detail_below {
                    category.files_below(self.thresholds.file_improvement, self.thresholds.max_improvement_files)
                } else {
                    Vec::new()
                };

                Some(RankedCategory {
                    position,
                    name: name.clone(),
                    coverage: category.coverage,
                    status: CoverageStatus::from_coverage(category.coverage, self.thresholds),
                    mark: PriorityMark::from_position(position),
                    improvement_files,
                })
            })
            .collect();

        let next_target = self.next_target(categories);
        match &next_target {
            Some(target) => log::info!("🎯 Next target resolved to '{}'", target),
            None => log::info!("🎉 No category below {}%", self.thresholds.target),
        }

        CoverageRanking { entries, next_target }
    }

    /// First category in priority order that is still under the target.
    pub fn next_target(&self, categories: &CategoryMap) -> Option<String> {
        self.priority_list
            .iter()
            .find(|name| {
                categories
                    .get(name.as_str())
                    .is_some_and(|category| category.coverage < self.thresholds.target)
            })
            .cloned()
    }
}
