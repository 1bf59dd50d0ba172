//! Buy-vs-rent comparison over a fixed horizon
//!
//! Ownership cost is the down payment plus mortgage payments and a flat
//! maintenance allowance; renting invests the unspent down payment at the
//! planning alternative return. Both paths are compared by net position at
//! the horizon.

use super::default_currency;
use crate::assumptions::Assumptions;
use crate::chart::Chart;
use crate::error::{ensure_finite, ensure_finite_output, CalcError, CalcResult};
use crate::projection::{
    amortized_payment, annuity_fv, checked_annual_rate, checked_monthly_rate, growth_factor,
    last_period, round_money, PeriodUnit, Series,
};
use crate::report::{format_money, Summarize};
use serde::{Deserialize, Serialize};

pub const BUY_COST_SERIES: &str = "buy_cumulative_cost";
pub const RENT_COST_SERIES: &str = "rent_cumulative_cost";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyRentRequest {
    pub property_price: f64,
    pub down_payment: f64,
    /// Annual mortgage rate, percent
    pub mortgage_rate: f64,
    /// Mortgage term, years
    pub mortgage_term: f64,
    pub monthly_rent: f64,
    /// Annual rent increase, percent
    pub rent_growth: f64,
    /// Annual property appreciation, percent
    pub property_growth: f64,
    /// Comparison horizon, years
    pub horizon: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Rent,
}

impl Recommendation {
    /// Buying wins only on a strictly better net position; ties rent
    pub fn from_positions(net_buy: f64, net_rent: f64) -> Self {
        if net_buy > net_rent {
            Recommendation::Buy
        } else {
            Recommendation::Rent
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyRentResult {
    pub net_buy_position: f64,
    pub net_rent_position: f64,
    pub recommendation: Recommendation,
    pub mortgage_payment: f64,
    pub future_property_value: f64,
    pub total_buy_cost: f64,
    pub total_rent_cost: f64,
    pub currency_symbol: String,
    pub chart: Chart,
}

/// Cumulative cost of each path after a whole number of years
#[derive(Debug, Clone, Copy)]
struct CostModel {
    down_payment: f64,
    annual_ownership_cost: f64,
    first_year_rent: f64,
    rent_growth: f64,
}

impl CostModel {
    fn buy_cost_at(&self, year: u32) -> f64 {
        self.down_payment + self.annual_ownership_cost * f64::from(year)
    }

    /// Rent paid so far, with the rent stepping up once a year
    fn rent_cost_at(&self, year: u32) -> f64 {
        annuity_fv(self.first_year_rent, self.rent_growth, f64::from(year))
    }
}

pub fn calculate(req: &BuyRentRequest, assumptions: &Assumptions) -> CalcResult<BuyRentResult> {
    let price = ensure_finite("property_price", req.property_price)?;
    let down_payment = ensure_finite("down_payment", req.down_payment)?;
    let mortgage_rate = ensure_finite("mortgage_rate", req.mortgage_rate)?;
    let mortgage_term = ensure_finite("mortgage_term", req.mortgage_term)?;
    let monthly_rent = ensure_finite("monthly_rent", req.monthly_rent)?;
    let rent_growth = ensure_finite("rent_growth", req.rent_growth)?;
    let property_growth = ensure_finite("property_growth", req.property_growth)?;
    let horizon = ensure_finite("horizon", req.horizon)?;

    if horizon < 1.0 {
        return Err(CalcError::InvalidHorizon { years: horizon });
    }
    let years = last_period(horizon.floor())?;
    let mortgage_rate = checked_monthly_rate("mortgage_rate", mortgage_rate)?;
    let rent_growth = checked_annual_rate("rent_growth", rent_growth)?;
    let property_growth = checked_annual_rate("property_growth", property_growth)?;

    let loan = (price - down_payment).max(0.0);
    let mortgage_payment = if loan > 0.0 {
        amortized_payment(loan, mortgage_rate, mortgage_term * 12.0)?
    } else {
        0.0
    };
    let mortgage_payment = ensure_finite_output("mortgage_payment", mortgage_payment)?;

    let planning = &assumptions.planning;
    let costs = CostModel {
        down_payment,
        annual_ownership_cost: mortgage_payment * 12.0 + price * planning.maintenance_rate,
        first_year_rent: monthly_rent * 12.0,
        rent_growth,
    };

    let horizon_years = f64::from(years);
    let future_property_value = ensure_finite_output(
        "future_property_value",
        price * growth_factor(property_growth, horizon_years),
    )?;
    let total_buy_cost = ensure_finite_output("total_buy_cost", costs.buy_cost_at(years))?;
    let total_rent_cost = ensure_finite_output("total_rent_cost", costs.rent_cost_at(years))?;

    let invested_down_payment = down_payment * growth_factor(planning.alternative_return, horizon_years);
    let net_buy = ensure_finite_output("net_buy_position", future_property_value - total_buy_cost)?;
    let net_rent = ensure_finite_output("net_rent_position", invested_down_payment - total_rent_cost)?;

    log::debug!("buy-vs-rent over {} years: buy {:.2}, rent {:.2}", years, net_buy, net_rent);

    let buy_series = Series::build(BUY_COST_SERIES, PeriodUnit::Year, 1..=years, |y| {
        round_money(costs.buy_cost_at(y))
    })
    .ensure_finite(BUY_COST_SERIES)?;
    let rent_series = Series::build(RENT_COST_SERIES, PeriodUnit::Year, 1..=years, |y| {
        round_money(costs.rent_cost_at(y))
    })
    .ensure_finite(RENT_COST_SERIES)?;

    Ok(BuyRentResult {
        net_buy_position: round_money(net_buy),
        net_rent_position: round_money(net_rent),
        recommendation: Recommendation::from_positions(net_buy, net_rent),
        mortgage_payment: round_money(mortgage_payment),
        future_property_value: round_money(future_property_value),
        total_buy_cost: round_money(total_buy_cost),
        total_rent_cost: round_money(total_rent_cost),
        currency_symbol: assumptions.currency_symbol(&req.currency),
        chart: Chart::line("Cost comparison", vec![buy_series, rent_series])
            .and_bars(&[("Buy", net_buy), ("Rent", net_rent)]),
    })
}

impl Summarize for BuyRentResult {
    const FILE_STEM: &'static str = "buy_rent";

    fn report_title(&self) -> String {
        "Buy vs rent analysis".to_string()
    }

    fn summary_lines(&self) -> Vec<String> {
        let s = &self.currency_symbol;
        let verdict = match self.recommendation {
            Recommendation::Buy => "BUY",
            Recommendation::Rent => "RENT",
        };
        vec![
            format!("Capital when buying: {}", format_money(s, self.net_buy_position)),
            format!("Capital when renting: {}", format_money(s, self.net_rent_position)),
            format!("Recommendation: {}", verdict),
        ]
    }

    fn chart(&self) -> &Chart {
        &self.chart
    }
}
