//! Deterministic offline recommendation generator.
//!
//! The degraded-mode path: when the caller decides not to (or cannot)
//! run the provider pipeline, this produces a schema-valid
//! [`Recommendation`] from templates alone. Pure, no I/O, never fails,
//! and unconditionally satisfies every structural invariant the
//! provider path is asked for.

use super::entities::{ConditionalInsights, Recommendation, UnitMetric};
use crate::company::CompanyContext;

/// Generate a template-based recommendation for the given company.
///
/// Always returns exactly 5 unit metrics and exactly 3 conversation
/// starters. Each enabled focus flag contributes its fixed 3-item
/// insight list; disabled flags leave the key absent.
pub fn fallback_recommendation(context: &CompanyContext) -> Recommendation {
    let name = context.company_name.as_str();

    let unit_metrics = vec![
        UnitMetric::new(
            "Cost per transaction",
            format!(
                "Track what each processed transaction costs {} in cloud spend. \
                 Tying infrastructure cost to transaction volume shows whether \
                 margins improve or erode as the business grows.",
                name
            ),
        ),
        UnitMetric::new(
            "Cost per service delivery",
            format!(
                "Measure the cloud cost of delivering {}'s core service to a \
                 customer. This separates the cost of serving existing revenue \
                 from the cost of building what comes next.",
                name
            ),
        ),
        UnitMetric::new(
            "Cost per new-customer onboarding",
            format!(
                "Quantify the infrastructure spend behind bringing a new customer \
                 onto {}'s platform. High onboarding cost is an early signal that \
                 growth will strain gross margin.",
                name
            ),
        ),
        UnitMetric::new(
            "Cost per business outcome",
            format!(
                "Connect {}'s cloud bill to the outcomes customers actually pay \
                 for. A cost-per-outcome view keeps engineering trade-offs \
                 anchored to revenue rather than raw utilization.",
                name
            ),
        ),
        UnitMetric::new(
            "Cost per customer-success milestone",
            format!(
                "Follow what it costs {} to move a customer through each success \
                 milestone. Rising milestone cost flags workloads worth \
                 re-architecting before renewal conversations.",
                name
            ),
        ),
    ];

    let conversation_starters = vec![
        format!(
            "How does {} currently connect cloud spend to the unit economics of \
             the business?",
            name
        ),
        format!(
            "Which of {}'s workloads grew faster than revenue over the last two \
             quarters?",
            name
        ),
        format!(
            "Who at {} sees cost data early enough to change an engineering \
             decision?",
            name
        ),
    ];

    let conditional_insights = ConditionalInsights {
        ppa: context.ppa.then(|| ppa_insights(name)),
        gen_ai: context.gen_ai.then(|| gen_ai_insights(name)),
        cloud_cost_concerns: context.cloud_cost_concerns.then(|| risk_insights(name)),
    };

    Recommendation {
        unit_metrics,
        conversation_starters,
        conditional_insights,
    }
}

fn ppa_insights(name: &str) -> Vec<String> {
    vec![
        format!(
            "Review how much of {}'s steady-state usage is covered by committed \
             spend before the next private pricing negotiation.",
            name
        ),
        format!(
            "Compare {}'s effective discount rate against on-demand pricing to \
             confirm the commitment is still earning its lock-in.",
            name
        ),
        format!(
            "Model how {}'s projected growth changes the break-even point of a \
             larger commitment tier.",
            name
        ),
    ]
}

fn gen_ai_insights(name: &str) -> Vec<String> {
    vec![
        format!(
            "Separate {}'s inference spend from training spend so each can be \
             optimized against its own utilization pattern.",
            name
        ),
        format!(
            "Evaluate whether {}'s GPU capacity is sized for peak demand or \
             average demand, and what queueing would save.",
            name
        ),
        format!(
            "Put a per-request cost on {}'s generative features so product can \
             price them sustainably.",
            name
        ),
    ]
}

fn risk_insights(name: &str) -> Vec<String> {
    vec![
        format!(
            "Identify which of {}'s environments lack spend alerts, since \
             unmonitored accounts are where overruns start.",
            name
        ),
        format!(
            "Check {}'s share of untagged spend; unallocated cost hides the \
             workloads most likely to surprise finance.",
            name
        ),
        format!(
            "Look for idle or oversized resources in {}'s non-production \
             accounts, the usual first source of quick savings.",
            name
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::parsing::parse_recommendation;

    fn all_flag_combinations() -> Vec<CompanyContext> {
        let mut contexts = Vec::new();
        for bits in 0..8u8 {
            contexts.push(
                CompanyContext::new("Globex")
                    .with_ppa(bits & 1 != 0)
                    .with_gen_ai(bits & 2 != 0)
                    .with_cloud_cost_concerns(bits & 4 != 0),
            );
        }
        contexts
    }

    #[test]
    fn test_counts_hold_for_every_flag_combination() {
        for ctx in all_flag_combinations() {
            let rec = fallback_recommendation(&ctx);
            assert_eq!(rec.unit_metrics.len(), 5);
            assert_eq!(rec.conversation_starters.len(), 3);
            rec.check_invariants().unwrap();
        }
    }

    #[test]
    fn test_insight_key_present_iff_flag_enabled() {
        for ctx in all_flag_combinations() {
            let rec = fallback_recommendation(&ctx);
            assert_eq!(rec.conditional_insights.ppa.is_some(), ctx.ppa);
            assert_eq!(rec.conditional_insights.gen_ai.is_some(), ctx.gen_ai);
            assert_eq!(
                rec.conditional_insights.cloud_cost_concerns.is_some(),
                ctx.cloud_cost_concerns
            );
            for list in [
                &rec.conditional_insights.ppa,
                &rec.conditional_insights.gen_ai,
                &rec.conditional_insights.cloud_cost_concerns,
            ]
            .into_iter()
            .flatten()
            {
                assert_eq!(list.len(), 3);
            }
        }
    }

    #[test]
    fn test_company_name_is_interpolated() {
        let rec = fallback_recommendation(&CompanyContext::new("Initech"));
        assert!(rec.unit_metrics.iter().any(|m| m.description.contains("Initech")));
        assert!(rec.conversation_starters.iter().all(|q| q.contains("Initech")));
    }

    #[test]
    fn test_round_trip_through_provider_path_validation() {
        // The fallback output must pass the exact same parsing and
        // required-key checks applied to a live provider response.
        let ctx = CompanyContext::new("Globex")
            .with_ppa(true)
            .with_cloud_cost_concerns(true);
        let rec = fallback_recommendation(&ctx);

        let wire = serde_json::to_string(&rec).unwrap();
        let reparsed = parse_recommendation(&wire).unwrap();
        assert_eq!(reparsed, rec);
        reparsed.check_invariants().unwrap();
    }

    #[test]
    fn test_deterministic() {
        let ctx = CompanyContext::new("Globex").with_gen_ai(true);
        assert_eq!(fallback_recommendation(&ctx), fallback_recommendation(&ctx));
    }
}
