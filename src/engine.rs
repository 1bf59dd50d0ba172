//! Calculator dispatch over a shared set of assumptions
//!
//! Loads assumptions once, then evaluates any number of tagged requests
//! against them. Requests are independent, so batches run on the rayon pool.

use crate::assumptions::Assumptions;
use crate::calculators::{
    buy_rent, credit, debt_payoff, emergency_fund, hourly, investment, retirement, tax, time_value,
    BuyRentRequest, BuyRentResult, CreditRequest, CreditResult, DebtPayoffRequest, DebtPayoffResult,
    EmergencyFundRequest, EmergencyFundResult, HourlyIncomeRequest, HourlyIncomeResult,
    InvestmentRequest, InvestmentResult, RetirementRequest, RetirementResult, TaxRequest, TaxResult,
    TimeValueRequest, TimeValueResult,
};
use crate::chart::Chart;
use crate::error::{AssumptionError, CalcResult, ReportError};
use crate::report::{Report, Summarize};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A request for any calculator, tagged by `"calculator"` in JSON
///
/// ```ignore
/// {"calculator": "debt-payoff", "balance": 10000, "interest_rate": 12, "monthly_payment": 300}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculationRequest {
    HourlyIncome(HourlyIncomeRequest),
    TimeValue(TimeValueRequest),
    Investment(InvestmentRequest),
    Credit(CreditRequest),
    BuyRent(BuyRentRequest),
    Retirement(RetirementRequest),
    DebtPayoff(DebtPayoffRequest),
    EmergencyFund(EmergencyFundRequest),
    Tax(TaxRequest),
}

impl CalculationRequest {
    pub fn calculator(&self) -> &'static str {
        match self {
            CalculationRequest::HourlyIncome(_) => "hourly-income",
            CalculationRequest::TimeValue(_) => "time-value",
            CalculationRequest::Investment(_) => "investment",
            CalculationRequest::Credit(_) => "credit",
            CalculationRequest::BuyRent(_) => "buy-rent",
            CalculationRequest::Retirement(_) => "retirement",
            CalculationRequest::DebtPayoff(_) => "debt-payoff",
            CalculationRequest::EmergencyFund(_) => "emergency-fund",
            CalculationRequest::Tax(_) => "tax",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculationResult {
    HourlyIncome(HourlyIncomeResult),
    TimeValue(TimeValueResult),
    Investment(InvestmentResult),
    Credit(CreditResult),
    BuyRent(BuyRentResult),
    Retirement(RetirementResult),
    DebtPayoff(DebtPayoffResult),
    EmergencyFund(EmergencyFundResult),
    Tax(TaxResult),
}

impl CalculationResult {
    /// Primary chart of whichever calculator produced this result
    pub fn chart(&self) -> &Chart {
        match self {
            CalculationResult::HourlyIncome(r) => r.chart(),
            CalculationResult::TimeValue(r) => r.chart(),
            CalculationResult::Investment(r) => r.chart(),
            CalculationResult::Credit(r) => r.chart(),
            CalculationResult::BuyRent(r) => r.chart(),
            CalculationResult::Retirement(r) => r.chart(),
            CalculationResult::DebtPayoff(r) => r.chart(),
            CalculationResult::EmergencyFund(r) => r.chart(),
            CalculationResult::Tax(r) => r.chart(),
        }
    }
}

/// Evaluates calculator requests against pre-loaded assumptions
#[derive(Debug, Clone, Default)]
pub struct FinanceEngine {
    assumptions: Assumptions,
}

impl FinanceEngine {
    /// Engine with the built-in tables
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Engine with overrides loaded from an assumptions directory
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionError> {
        Ok(Self {
            assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn hourly_income(&self, req: &HourlyIncomeRequest) -> CalcResult<HourlyIncomeResult> {
        hourly::calculate(req, &self.assumptions)
    }

    pub fn time_value(&self, req: &TimeValueRequest) -> CalcResult<TimeValueResult> {
        time_value::calculate(req, &self.assumptions)
    }

    pub fn investment(&self, req: &InvestmentRequest) -> CalcResult<InvestmentResult> {
        investment::calculate(req, &self.assumptions)
    }

    pub fn credit(&self, req: &CreditRequest) -> CalcResult<CreditResult> {
        credit::calculate(req, &self.assumptions)
    }

    pub fn buy_rent(&self, req: &BuyRentRequest) -> CalcResult<BuyRentResult> {
        buy_rent::calculate(req, &self.assumptions)
    }

    pub fn retirement(&self, req: &RetirementRequest) -> CalcResult<RetirementResult> {
        retirement::calculate(req, &self.assumptions)
    }

    pub fn debt_payoff(&self, req: &DebtPayoffRequest) -> CalcResult<DebtPayoffResult> {
        debt_payoff::calculate(req, &self.assumptions)
    }

    pub fn emergency_fund(&self, req: &EmergencyFundRequest) -> CalcResult<EmergencyFundResult> {
        emergency_fund::calculate(req, &self.assumptions)
    }

    pub fn tax(&self, req: &TaxRequest) -> CalcResult<TaxResult> {
        tax::calculate(req, &self.assumptions)
    }

    /// Dispatch a tagged request to its calculator
    pub fn run(&self, request: &CalculationRequest) -> CalcResult<CalculationResult> {
        log::debug!("running {} calculator", request.calculator());

        Ok(match request {
            CalculationRequest::HourlyIncome(req) => CalculationResult::HourlyIncome(self.hourly_income(req)?),
            CalculationRequest::TimeValue(req) => CalculationResult::TimeValue(self.time_value(req)?),
            CalculationRequest::Investment(req) => CalculationResult::Investment(self.investment(req)?),
            CalculationRequest::Credit(req) => CalculationResult::Credit(self.credit(req)?),
            CalculationRequest::BuyRent(req) => CalculationResult::BuyRent(self.buy_rent(req)?),
            CalculationRequest::Retirement(req) => CalculationResult::Retirement(self.retirement(req)?),
            CalculationRequest::DebtPayoff(req) => CalculationResult::DebtPayoff(self.debt_payoff(req)?),
            CalculationRequest::EmergencyFund(req) => {
                CalculationResult::EmergencyFund(self.emergency_fund(req)?)
            }
            CalculationRequest::Tax(req) => CalculationResult::Tax(self.tax(req)?),
        })
    }

    /// Run a request once and return the result together with its report
    pub fn run_with_report(
        &self,
        request: &CalculationRequest,
    ) -> Result<(CalculationResult, Report), ReportError> {
        log::debug!("running {} calculator with report", request.calculator());

        match request {
            CalculationRequest::HourlyIncome(req) => {
                paired(req, self.hourly_income(req)?, CalculationResult::HourlyIncome)
            }
            CalculationRequest::TimeValue(req) => paired(req, self.time_value(req)?, CalculationResult::TimeValue),
            CalculationRequest::Investment(req) => paired(req, self.investment(req)?, CalculationResult::Investment),
            CalculationRequest::Credit(req) => paired(req, self.credit(req)?, CalculationResult::Credit),
            CalculationRequest::BuyRent(req) => paired(req, self.buy_rent(req)?, CalculationResult::BuyRent),
            CalculationRequest::Retirement(req) => paired(req, self.retirement(req)?, CalculationResult::Retirement),
            CalculationRequest::DebtPayoff(req) => paired(req, self.debt_payoff(req)?, CalculationResult::DebtPayoff),
            CalculationRequest::EmergencyFund(req) => {
                paired(req, self.emergency_fund(req)?, CalculationResult::EmergencyFund)
            }
            CalculationRequest::Tax(req) => paired(req, self.tax(req)?, CalculationResult::Tax),
        }
    }

    /// Run a request and wrap the result with its report summary
    pub fn report(&self, request: &CalculationRequest) -> Result<Report, ReportError> {
        self.run_with_report(request).map(|(_, report)| report)
    }

    /// Run many requests in parallel; output order matches input order
    pub fn run_batch(&self, requests: &[CalculationRequest]) -> Vec<CalcResult<CalculationResult>> {
        requests
            .par_iter()
            .enumerate()
            .map(|(index, request)| {
                let outcome = self.run(request);
                if let Err(err) = &outcome {
                    log::warn!("request {} ({}) rejected: {}", index, request.calculator(), err);
                }
                outcome
            })
            .collect()
    }
}

fn paired<Q, R>(
    request: &Q,
    result: R,
    wrap: fn(R) -> CalculationResult,
) -> Result<(CalculationResult, Report), ReportError>
where
    Q: Serialize,
    R: Summarize,
{
    let report = Report::build(request, &result)?;
    Ok((wrap(result), report))
}
