//! Model aggregation service
//!
//! Fans out to every configured provider, collects each one's model list,
//! and regroups OpenRouter's flat catalog into per-company groups. Provider
//! failures are isolated: a provider that errors contributes nothing and
//! the rest of the response is unaffected.

use std::collections::HashMap;
use std::sync::Arc;

use crate::providers::{ClientFactory, ProviderInfo};
use crate::schemas::openrouter::ListedModel;
use crate::schemas::{ModelSummary, ProviderDescriptor, ProviderModelGroup};

/// Company bucket for models whose metadata yields no attribution.
const FALLBACK_COMPANY: &str = "Other";

/// Outcome of fetching one provider's contribution.
#[derive(Debug)]
pub enum ProviderFetch {
    /// The provider's groups, ready to append to the response.
    Groups(Vec<ProviderModelGroup>),
    /// The provider is dropped from the response for the given reason.
    Skipped { reason: String },
}

/// Aggregates model lists across providers.
pub struct ModelAggregator {
    factory: Arc<dyn ClientFactory>,
}

impl ModelAggregator {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }

    /// Produce the full aggregated response for the given providers.
    ///
    /// Providers are queried sequentially in registry order. Skips are
    /// logged and swallowed; if every provider fails the result is simply
    /// empty.
    pub async fn aggregate(&self, providers: &[ProviderInfo]) -> Vec<ProviderModelGroup> {
        let mut groups = Vec::new();

        for provider in providers {
            match self.fetch_provider(provider).await {
                ProviderFetch::Groups(g) => groups.extend(g),
                ProviderFetch::Skipped { reason } => {
                    tracing::warn!(provider = %provider.id, %reason, "Skipping provider");
                }
            }
        }

        groups
    }

    /// Fetch one provider's groups, mapping every failure to a skip.
    pub async fn fetch_provider(&self, provider: &ProviderInfo) -> ProviderFetch {
        let client = match self.factory.client_for(provider) {
            Ok(client) => client,
            Err(err) => {
                return ProviderFetch::Skipped {
                    reason: err.to_string(),
                }
            }
        };

        let models = match client.list_models().await {
            Ok(models) => models,
            Err(err) => {
                return ProviderFetch::Skipped {
                    reason: format!("model listing failed: {}", err),
                }
            }
        };

        if provider.is_openrouter() {
            // Replace the single OpenRouter group with one group per
            // company, derived from the full metadata listing. A failure
            // here skips the provider outright; no partial split.
            return match client.full_listing().await {
                Ok(listing) => {
                    ProviderFetch::Groups(group_by_company(provider, listing.data))
                }
                Err(err) => ProviderFetch::Skipped {
                    reason: format!("metadata listing failed: {}", err),
                },
            };
        }

        ProviderFetch::Groups(vec![ProviderModelGroup {
            provider: plain_descriptor(provider),
            models,
        }])
    }
}

/// Descriptor for a provider's default single group.
fn plain_descriptor(provider: &ProviderInfo) -> ProviderDescriptor {
    ProviderDescriptor {
        id: provider.id.clone(),
        name: provider.name.clone(),
        description: provider.description.clone(),
        is_local: provider.is_local,
        examples: Some(provider.examples.clone()),
        company: None,
    }
}

/// Partition an OpenRouter listing into per-company groups, in the order
/// companies first appear.
pub fn group_by_company(
    provider: &ProviderInfo,
    listing: Vec<ListedModel>,
) -> Vec<ProviderModelGroup> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<ModelSummary>> = HashMap::new();

    for model in listing {
        let company = infer_company(&model);
        let summary = ModelSummary {
            name: model.name.unwrap_or_else(|| model.id.clone()),
            id: model.id,
            description: model.description,
        };

        buckets
            .entry(company.clone())
            .or_insert_with(|| {
                order.push(company.clone());
                Vec::new()
            })
            .push(summary);
    }

    order
        .into_iter()
        .map(|company| {
            let models = buckets.remove(&company).unwrap_or_default();
            ProviderModelGroup {
                provider: ProviderDescriptor {
                    id: provider.id.clone(),
                    name: format!("{} ({})", provider.name, company),
                    description: format!("Models by {} via {}", company, provider.name),
                    is_local: false,
                    examples: None,
                    company: Some(company),
                },
                models,
            }
        })
        .collect()
}

/// Infer the company a listed model belongs to.
///
/// Ordered attempts: explicit organization, explicit provider, the id
/// prefix before the first `/`, and finally the shared fallback bucket.
/// Empty strings count as absent.
fn infer_company(model: &ListedModel) -> String {
    non_empty(model.organization.as_deref())
        .or_else(|| non_empty(model.provider.as_deref()))
        .or_else(|| non_empty(model.id.split_once('/').map(|(prefix, _)| prefix)))
        .unwrap_or(FALLBACK_COMPANY)
        .to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
