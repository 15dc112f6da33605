//! The screens. Every one of them talks to the backend exclusively through
//! the [`ApiClient`](crate::api::ApiClient) taken from context; none of them
//! reads the token storage directly.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::models::{CategoryAmount, Goal, InvestmentAdvice, Overview, Profile, RecentTransaction,
    Recommendation, TaxAdvice, TrendGraphs};
use crate::{
    format_amount, icon_credit_card, icon_download, icon_wallet, icon_arrow_up_right, page_shell,
};

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    UpRight,
    CreditCard,
    Wallet,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    amount: f64,
    icon: StatIcon,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_amount(props.amount) }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::UpRight => icon_arrow_up_right(),
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::Wallet => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub on_authenticated: Callback<()>,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    let is_login = use_state(|| true);
    let username = use_state(|| "".to_string());
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let info = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let api = api.clone();
        let is_login = is_login.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let info = info.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username_val = username.trim().to_string();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();
            let login_mode = *is_login;

            if username_val.is_empty() || password_val.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }
            if !login_mode && email_val.is_empty() {
                error.set(Some("Email is required".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);
            info.set(None);

            let api = api.clone();
            let is_login = is_login.clone();
            let error = error.clone();
            let info = info.clone();
            let loading = loading.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                if login_mode {
                    match api.login(&username_val, &password_val).await {
                        Ok(_) => on_authenticated.emit(()),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                } else {
                    match api.register(&username_val, &email_val, &password_val).await {
                        Ok(payload) => {
                            if api.is_logged_in() {
                                on_authenticated.emit(());
                            } else {
                                info.set(Some(payload.message.unwrap_or_else(|| {
                                    "Registered successfully! Please log in.".to_string()
                                })));
                                is_login.set(true);
                            }
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                }
                loading.set(false);
            });
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        let error = error.clone();
        let info = info.clone();
        Callback::from(move |_| {
            is_login.set(!*is_login);
            error.set(None);
            info.set(None);
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{ if *is_login { "Welcome back" } else { "Create account" } }</h1>
                    <p class="text-sm text-muted-foreground mt-2">
                        { if *is_login { "Sign in to continue." } else { "Start tracking your finances." } }
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Username"}</label>
                        <input
                            type="text"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*username).clone()}
                            oninput={{
                                let username = username.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    username.set(input.value());
                                })
                            }}
                        />
                    </div>

                    if !*is_login {
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Email"}</label>
                            <input
                                type="email"
                                class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                value={(*email).clone()}
                                oninput={{
                                    let email = email.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        email.set(input.value());
                                    })
                                }}
                            />
                        </div>
                    }

                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Password"}</label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-500">{ msg.clone() }</div>
                    }
                    if let Some(msg) = &*info {
                        <div class="text-sm text-green-600">{ msg.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else if *is_login { "Login" } else { "Sign up" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    { if *is_login { "No account?" } else { "Already have an account?" } }
                    <button class="ml-2 text-primary font-semibold" onclick={toggle_mode}>
                        { if *is_login { "Sign up" } else { "Login" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    let overview = use_state(|| None::<Overview>);
    let recent = use_state(|| Vec::<RecentTransaction>::new());
    let goals = use_state(|| Vec::<Goal>::new());
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let api = api.clone();
        let overview = overview.clone();
        let recent = recent.clone();
        let goals = goals.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.overview().await {
                        Ok(data) => overview.set(Some(data)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    if let Ok(list) = api.recent_transactions().await {
                        recent.set(list);
                    }
                    if let Ok(list) = api.goals().await {
                        goals.set(list);
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let (total_income, total_expenses, available_balance) = match &*overview {
        Some(data) => (data.total_income, data.total_expenses, data.available_balance),
        None => (0.0, 0.0, 0.0),
    };

    let mut distribution: Vec<(String, f64)> = overview
        .as_ref()
        .map(|data| data.expense_distribution.clone().into_iter().collect())
        .unwrap_or_default();
    distribution.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    html! {
        { page_shell(
            "Dashboard",
            html! {},
            html! {
                <>
                    if let Some(msg) = &*error {
                        <p class="text-sm text-red-500">{ msg.clone() }</p>
                    }

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="Total Income" amount={total_income} icon={StatIcon::UpRight} />
                        <StatCard title="Total Expenses" amount={total_expenses} icon={StatIcon::CreditCard} />
                        <StatCard title="Available Balance" amount={available_balance} icon={StatIcon::Wallet} />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <div class="flex items-center justify-between mb-3">
                                <h3 class="font-bold text-foreground text-lg">{"Expense Breakdown"}</h3>
                                <span class="text-xs text-muted-foreground">{"By category"}</span>
                            </div>
                            { if *loading {
                                html! { <p class="text-sm text-muted-foreground">{"Loading..."}</p> }
                            } else if distribution.is_empty() {
                                html! { <p class="text-sm text-muted-foreground">{"No expenses recorded yet."}</p> }
                            } else {
                                html! {
                                    <div class="space-y-2">
                                        { for distribution.iter().map(|(category, amount)| {
                                            let percent = if total_expenses > 0.0 {
                                                (amount / total_expenses * 100.0).round() as i64
                                            } else {
                                                0
                                            };
                                            html! {
                                                <div class="flex flex-col gap-1 text-sm">
                                                    <div class="flex items-center justify-between">
                                                        <span class="text-foreground">{ category.clone() }</span>
                                                        <span class="text-muted-foreground">{ format!("{} ({}%)", format_amount(*amount), percent) }</span>
                                                    </div>
                                                    <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                                                        <div class="h-full bg-primary" style={format!("width: {}%", percent.min(100))}></div>
                                                    </div>
                                                </div>
                                            }
                                        }) }
                                    </div>
                                }
                            }}
                        </div>

                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <div class="flex items-center justify-between mb-3">
                                <h3 class="font-bold text-foreground text-lg">{"Goals"}</h3>
                                <span class="text-xs text-muted-foreground">{"Progress"}</span>
                            </div>
                            { if goals.is_empty() {
                                html! { <p class="text-sm text-muted-foreground">{"No goals set yet."}</p> }
                            } else {
                                html! {
                                    <div class="space-y-3">
                                        { for goals.iter().enumerate().map(|(idx, goal)| {
                                            let percent = (goal.progress.clamp(0.0, 100.0)) as i64;
                                            html! {
                                                <div key={idx} class="flex flex-col gap-1 text-sm">
                                                    <div class="flex items-center justify-between">
                                                        <span class="text-foreground">{ goal.name.clone() }</span>
                                                        <span class="text-muted-foreground">{ format!("{}%", percent) }</span>
                                                    </div>
                                                    <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                                                        <div class="h-full bg-primary" style={format!("width: {}%", percent)}></div>
                                                    </div>
                                                </div>
                                            }
                                        }) }
                                    </div>
                                }
                            }}
                        </div>
                    </div>

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="p-6 flex justify-between items-center border-b border-border">
                            <h3 class="font-bold text-foreground text-lg">{"Recent Transactions"}</h3>
                        </div>
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-8 py-4 font-bold">{"Date"}</th>
                                        <th class="px-8 py-4 font-bold">{"Category"}</th>
                                        <th class="px-8 py-4 font-bold">{"Type"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Amount"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { if *loading {
                                        html! { <tr><td colspan="4" class="px-8 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                                    } else if recent.is_empty() {
                                        html! { <tr><td colspan="4" class="px-8 py-6 text-center text-muted-foreground">{"No transactions yet."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for recent.iter().enumerate().map(|(idx, tx)| {
                                                    let amount_label = if tx.kind == "income" {
                                                        format!("+ {}", format_amount(tx.amount))
                                                    } else {
                                                        format!("- {}", format_amount(tx.amount))
                                                    };
                                                    html! {
                                                        <tr key={idx} class="text-sm hover:bg-muted/30 transition-colors">
                                                            <td class="px-8 py-4 text-muted-foreground">{ tx.date.clone() }</td>
                                                            <td class="px-8 py-4">
                                                                <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ tx.category.clone() }</span>
                                                            </td>
                                                            <td class="px-8 py-4 text-muted-foreground">{ tx.kind.clone() }</td>
                                                            <td class="px-8 py-4 text-right font-semibold text-foreground">{ amount_label }</td>
                                                        </tr>
                                                    }
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}

#[function_component(IncomePage)]
pub fn income_page() -> Html {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    let total_income = use_state(|| 0.0f64);

    let form_date = use_state(|| "".to_string());
    let form_amount = use_state(|| "".to_string());
    let form_source = use_state(|| "Salary".to_string());
    let form_city = use_state(|| "".to_string());
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let total_income = total_income.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if let Ok(data) = api.overview().await {
                        total_income.set(data.total_income);
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_add = {
        let api = api.clone();
        let total_income = total_income.clone();
        let form_date = form_date.clone();
        let form_amount = form_amount.clone();
        let form_source = form_source.clone();
        let form_city = form_city.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let date_val = form_date.trim().to_string();
            let amount_val = form_amount.trim().to_string();
            let source_val = form_source.trim().to_string();
            let city_val = form_city.trim().to_string();

            if date_val.is_empty() || amount_val.is_empty() || source_val.is_empty() {
                form_error.set(Some("Date, amount and source are required.".to_string()));
                return;
            }
            let amount = amount_val.parse::<f64>().unwrap_or(0.0);
            if amount <= 0.0 {
                form_error.set(Some("Amount must be a positive number.".to_string()));
                return;
            }

            form_error.set(None);
            form_success.set(None);
            saving.set(true);

            let api = api.clone();
            let total_income = total_income.clone();
            let form_date = form_date.clone();
            let form_amount = form_amount.clone();
            let form_city = form_city.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api.add_income(amount, &source_val, &city_val, &date_val).await {
                    Ok(payload) => {
                        form_success.set(Some(payload.message.unwrap_or_else(|| {
                            "Income added successfully!".to_string()
                        })));
                        form_date.set("".to_string());
                        form_amount.set("".to_string());
                        form_city.set("".to_string());
                        if let Ok(data) = api.overview().await {
                            total_income.set(data.total_income);
                        }
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Income Tracker",
            html! {},
            html! {
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-4 items-stretch">
                    <div class="lg:col-span-4 bg-white p-5 rounded-[10px] shadow-sm border border-white/50 flex flex-col justify-center">
                        <div class="flex items-center gap-2 mb-1">
                            <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_wallet() }</div>
                            <span class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{"Total Income"}</span>
                        </div>
                        <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_amount(*total_income) }</h3>
                    </div>

                    <div class="lg:col-span-8 bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
                        <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">{"Add New Income"}</h4>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mb-4">
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Date"}</label>
                                <input type="date" value={(*form_date).clone()} oninput={{
                                    let form_date = form_date.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        form_date.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Amount"}</label>
                                <input type="number" placeholder="0.00" value={(*form_amount).clone()} oninput={{
                                    let form_amount = form_amount.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        form_amount.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Source"}</label>
                                <select value={(*form_source).clone()} onchange={{
                                    let form_source = form_source.clone();
                                    Callback::from(move |e: Event| {
                                        let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        form_source.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-[11px] focus:ring-2 focus:ring-[#1D617A] outline-none">
                                    <option>{"Salary"}</option>
                                    <option>{"Freelance"}</option>
                                    <option>{"Business"}</option>
                                    <option>{"Investment"}</option>
                                    <option>{"Other"}</option>
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"City"}</label>
                                <input type="text" placeholder="City" value={(*form_city).clone()} oninput={{
                                    let form_city = form_city.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        form_city.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                            </div>
                        </div>
                        <button onclick={on_add} class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Add Income" } }
                        </button>
                        {
                            if let Some(msg) = &*form_error {
                                html! { <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p> }
                            } else if let Some(msg) = &*form_success {
                                html! { <p class="text-sm text-green-600 mt-3">{ msg.clone() }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            }
        ) }
    }
}

#[function_component(ExpensePage)]
pub fn expense_page() -> Html {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    let total_expenses = use_state(|| 0.0f64);

    let form_date = use_state(|| "".to_string());
    let form_amount = use_state(|| "".to_string());
    let form_category = use_state(|| "Food".to_string());
    let form_payment = use_state(|| "Cash".to_string());
    let form_description = use_state(|| "".to_string());
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let total_expenses = total_expenses.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if let Ok(data) = api.overview().await {
                        total_expenses.set(data.total_expenses);
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_add = {
        let api = api.clone();
        let total_expenses = total_expenses.clone();
        let form_date = form_date.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_payment = form_payment.clone();
        let form_description = form_description.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let date_val = form_date.trim().to_string();
            let amount_val = form_amount.trim().to_string();
            let category_val = form_category.trim().to_string();
            let payment_val = form_payment.trim().to_string();
            let description_val = form_description.trim().to_string();

            if date_val.is_empty() || amount_val.is_empty() {
                form_error.set(Some("Date and amount are required.".to_string()));
                return;
            }
            let amount = amount_val.parse::<f64>().unwrap_or(0.0);
            if amount <= 0.0 {
                form_error.set(Some("Amount must be a positive number.".to_string()));
                return;
            }

            form_error.set(None);
            form_success.set(None);
            saving.set(true);

            let api = api.clone();
            let total_expenses = total_expenses.clone();
            let form_date = form_date.clone();
            let form_amount = form_amount.clone();
            let form_description = form_description.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api
                    .add_expense(amount, &category_val, &payment_val, &description_val, &date_val)
                    .await
                {
                    Ok(payload) => {
                        form_success.set(Some(payload.message.unwrap_or_else(|| {
                            "Expense added successfully!".to_string()
                        })));
                        form_date.set("".to_string());
                        form_amount.set("".to_string());
                        form_description.set("".to_string());
                        if let Ok(data) = api.overview().await {
                            total_expenses.set(data.total_expenses);
                        }
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let on_download = {
        let api = api.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            let api = api.clone();
            let form_error = form_error.clone();
            spawn_local(async move {
                match api.download_expenses_csv().await {
                    Ok(csv) => save_text_file(&csv, "expenses.csv", "text/csv"),
                    Err(err) => form_error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        { page_shell(
            "Expense Tracker",
            html! {
                <button onclick={on_download} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_download() }
                    {"Export CSV"}
                </button>
            },
            html! {
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-4 items-stretch">
                    <div class="lg:col-span-4 bg-white p-5 rounded-[10px] shadow-sm border border-white/50 flex flex-col justify-center">
                        <div class="flex items-center gap-2 mb-1">
                            <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_credit_card() }</div>
                            <span class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{"Total Expenses"}</span>
                        </div>
                        <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_amount(*total_expenses) }</h3>
                    </div>

                    <div class="lg:col-span-8 bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
                        <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">{"Add New Expense"}</h4>
                        <div class="grid grid-cols-2 md:grid-cols-5 gap-3 mb-4">
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Date"}</label>
                                <input type="date" value={(*form_date).clone()} oninput={{
                                    let form_date = form_date.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        form_date.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Amount"}</label>
                                <input type="number" placeholder="0.00" value={(*form_amount).clone()} oninput={{
                                    let form_amount = form_amount.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        form_amount.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                                <select value={(*form_category).clone()} onchange={{
                                    let form_category = form_category.clone();
                                    Callback::from(move |e: Event| {
                                        let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        form_category.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-[11px] focus:ring-2 focus:ring-[#1D617A] outline-none">
                                    <option>{"Food"}</option>
                                    <option>{"Travel"}</option>
                                    <option>{"Shopping"}</option>
                                    <option>{"Utilities"}</option>
                                    <option>{"Rent"}</option>
                                    <option>{"Other"}</option>
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Payment"}</label>
                                <select value={(*form_payment).clone()} onchange={{
                                    let form_payment = form_payment.clone();
                                    Callback::from(move |e: Event| {
                                        let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        form_payment.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-[11px] focus:ring-2 focus:ring-[#1D617A] outline-none">
                                    <option>{"Cash"}</option>
                                    <option>{"Card"}</option>
                                    <option>{"UPI"}</option>
                                    <option>{"Online"}</option>
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Description"}</label>
                                <input type="text" placeholder="What was it for?" value={(*form_description).clone()} oninput={{
                                    let form_description = form_description.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        form_description.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                            </div>
                        </div>
                        <button onclick={on_add} class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Add Expense" } }
                        </button>
                        {
                            if let Some(msg) = &*form_error {
                                html! { <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p> }
                            } else if let Some(msg) = &*form_success {
                                html! { <p class="text-sm text-green-600 mt-3">{ msg.clone() }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            }
        ) }
    }
}

/// Hands a server-produced file to the browser through a blob object URL.
fn save_text_file(contents: &str, filename: &str, mime: &str) {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = match web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) {
        Ok(blob) => blob,
        Err(_) => return,
    };
    let url = match web_sys::Url::create_object_url_with_blob(&blob) {
        Ok(url) => url,
        Err(_) => return,
    };
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[function_component(AdvicePage)]
pub fn advice_page() -> Html {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    let recommendations = use_state(|| Vec::<Recommendation>::new());
    let tax = use_state(|| None::<TaxAdvice>);
    let investment = use_state(|| None::<InvestmentAdvice>);
    let risk = use_state(|| "medium".to_string());
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let api = api.clone();
        let recommendations = recommendations.clone();
        let tax = tax.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.advice().await {
                        Ok(list) => recommendations.set(list),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    if let Ok(data) = api.tax_advice().await {
                        tax.set(Some(data));
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_refresh = {
        let api = api.clone();
        let recommendations = recommendations.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let api = api.clone();
            let recommendations = recommendations.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match api.advice().await {
                    Ok(list) => recommendations.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    let on_fetch_investment = {
        let api = api.clone();
        let investment = investment.clone();
        let risk = risk.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let api = api.clone();
            let investment = investment.clone();
            let risk_val = (*risk).clone();
            let error = error.clone();
            spawn_local(async move {
                match api.investment_advice(&risk_val).await {
                    Ok(data) => investment.set(Some(data)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        { page_shell(
            "Advice",
            html! {
                <button onclick={on_refresh} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all" disabled={*loading}>
                    { if *loading { "Loading..." } else { "Refresh Advice" } }
                </button>
            },
            html! {
                <>
                    if let Some(msg) = &*error {
                        <p class="text-sm text-red-500">{ msg.clone() }</p>
                    }

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h3 class="font-bold text-foreground text-lg mb-3">{"Spending Recommendations"}</h3>
                        { if recommendations.is_empty() {
                            html! { <p class="text-sm text-muted-foreground">{"No recommendations yet. Add some income and expenses first."}</p> }
                        } else {
                            html! {
                                <div class="space-y-2">
                                    { for recommendations.iter().enumerate().map(|(idx, rec)| {
                                        let predicted = rec
                                            .predicted_next_month
                                            .map(|p| format!("(Predicted next month: {})", format_amount(p)))
                                            .unwrap_or_else(|| "(Predicted next month: N/A)".to_string());
                                        html! {
                                            <div key={idx} class="flex flex-col gap-1 p-3 border rounded text-sm">
                                                <div class="flex items-center justify-between">
                                                    <span class="font-semibold text-foreground">{ rec.category.clone() }</span>
                                                    <span class="text-xs text-muted-foreground">{ predicted }</span>
                                                </div>
                                                <p class="text-muted-foreground">{ rec.advice.clone().unwrap_or_else(|| "No advice".to_string()) }</p>
                                            </div>
                                        }
                                    }) }
                                </div>
                            }
                        }}
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-3">{"Tax Estimate"}</h3>
                            { match &*tax {
                                Some(data) => html! {
                                    <div class="space-y-2 text-sm">
                                        <div class="flex items-center justify-between">
                                            <span class="text-muted-foreground">{"Total income"}</span>
                                            <span class="font-semibold text-foreground">{ format_amount(data.total_income) }</span>
                                        </div>
                                        <div class="flex items-center justify-between">
                                            <span class="text-muted-foreground">{"Standard deduction"}</span>
                                            <span class="font-semibold text-foreground">{ format_amount(data.standard_deduction) }</span>
                                        </div>
                                        <div class="flex items-center justify-between">
                                            <span class="text-muted-foreground">{"Taxable income (estimate)"}</span>
                                            <span class="font-semibold text-foreground">{ format_amount(data.taxable_income_estimate) }</span>
                                        </div>
                                        { if data.tips.is_empty() {
                                            html! {}
                                        } else {
                                            html! {
                                                <ul class="mt-3 space-y-1 list-disc list-inside text-muted-foreground">
                                                    { for data.tips.iter().map(|tip| html! { <li>{ tip.clone() }</li> }) }
                                                </ul>
                                            }
                                        }}
                                    </div>
                                },
                                None => html! { <p class="text-sm text-muted-foreground">{"No tax data yet."}</p> },
                            }}
                        </div>

                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <div class="flex items-center justify-between mb-3">
                                <h3 class="font-bold text-foreground text-lg">{"Investment Suggestions"}</h3>
                                <div class="flex items-center gap-2">
                                    <select value={(*risk).clone()} onchange={{
                                        let risk = risk.clone();
                                        Callback::from(move |e: Event| {
                                            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                            risk.set(input.value());
                                        })
                                    }} class="bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-[11px] focus:ring-2 focus:ring-[#1D617A] outline-none">
                                        <option value="low">{"Low risk"}</option>
                                        <option value="medium">{"Medium risk"}</option>
                                        <option value="high">{"High risk"}</option>
                                    </select>
                                    <button onclick={on_fetch_investment} class="bg-[#173E63] text-white px-3 py-2 rounded-[10px] text-[10px] font-bold">{"Get"}</button>
                                </div>
                            </div>
                            { match &*investment {
                                Some(data) => html! {
                                    <div class="space-y-2 text-sm">
                                        <div class="flex items-center justify-between">
                                            <span class="text-muted-foreground">{"Savings available"}</span>
                                            <span class="font-semibold text-foreground">{ format_amount(data.savings) }</span>
                                        </div>
                                        <div class="flex items-center justify-between">
                                            <span class="text-muted-foreground">{"Risk profile"}</span>
                                            <span class="font-semibold text-foreground">{ data.risk_profile.clone() }</span>
                                        </div>
                                        <div class="space-y-1 mt-3">
                                            { for data.suggestions.iter().map(|(name, value)| {
                                                let detail = value
                                                    .as_str()
                                                    .map(|s| s.to_string())
                                                    .unwrap_or_else(|| value.to_string());
                                                html! {
                                                    <div class="flex items-center justify-between">
                                                        <span class="text-foreground">{ name.clone() }</span>
                                                        <span class="text-muted-foreground">{ detail }</span>
                                                    </div>
                                                }
                                            }) }
                                        </div>
                                    </div>
                                },
                                None => html! { <p class="text-sm text-muted-foreground">{"Pick a risk level and fetch suggestions."}</p> },
                            }}
                        </div>
                    </div>
                </>
            }
        ) }
    }
}

#[function_component(GraphsPage)]
pub fn graphs_page() -> Html {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    let pie = use_state(|| None::<String>);
    let pie_message = use_state(|| None::<String>);
    let chart = use_state(|| Vec::<CategoryAmount>::new());
    let trends = use_state(|| None::<TrendGraphs>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let api = api.clone();
        let pie = pie.clone();
        let pie_message = pie_message.clone();
        let chart = chart.clone();
        let trends = trends.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.expense_graph().await {
                        Ok(data) => {
                            pie.set(data.graph);
                            pie_message.set(data.message);
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    if let Ok(list) = api.expense_chart().await {
                        chart.set(list);
                    }
                    if let Ok(data) = api.trend_graphs().await {
                        trends.set(Some(data));
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    html! {
        { page_shell(
            "Graphs",
            html! {},
            html! {
                <>
                    if let Some(msg) = &*error {
                        <p class="text-sm text-red-500">{ msg.clone() }</p>
                    }

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-3">{"Expense Distribution"}</h3>
                            { if *loading {
                                html! { <p class="text-sm text-muted-foreground">{"Loading..."}</p> }
                            } else if let Some(graph) = &*pie {
                                html! { <img src={format!("data:image/png;base64,{}", graph)} alt="Expense distribution" class="w-full rounded" /> }
                            } else {
                                html! { <p class="text-sm text-muted-foreground">{ (*pie_message).clone().unwrap_or_else(|| "No expenses found!".to_string()) }</p> }
                            }}
                        </div>

                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-3">{"Spending by Category"}</h3>
                            { if chart.is_empty() {
                                html! { <p class="text-sm text-muted-foreground">{"No expense data yet."}</p> }
                            } else {
                                html! {
                                    <div class="space-y-2">
                                        { for chart.iter().map(|item| html! {
                                            <div class="flex items-center justify-between text-sm">
                                                <span class="text-muted-foreground">{ item.category.clone() }</span>
                                                <span class="font-semibold text-foreground">{ format_amount(item.amount) }</span>
                                            </div>
                                        }) }
                                    </div>
                                }
                            }}
                        </div>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        { match &*trends {
                            Some(data) => html! {
                                <>
                                    <div class="bg-card rounded-[10px] p-6 border border-border">
                                        <h3 class="font-bold text-foreground text-lg mb-3">{"Income Trend"}</h3>
                                        { match &data.income_graph {
                                            Some(graph) => html! { <img src={format!("data:image/png;base64,{}", graph)} alt="Income trend" class="w-full rounded" /> },
                                            None => html! { <p class="text-sm text-muted-foreground">{ data.message.clone().unwrap_or_else(|| "No data to show".to_string()) }</p> },
                                        }}
                                    </div>
                                    <div class="bg-card rounded-[10px] p-6 border border-border">
                                        <h3 class="font-bold text-foreground text-lg mb-3">{"Expense Trend"}</h3>
                                        { match &data.expense_graph {
                                            Some(graph) => html! { <img src={format!("data:image/png;base64,{}", graph)} alt="Expense trend" class="w-full rounded" /> },
                                            None => html! { <p class="text-sm text-muted-foreground">{ data.message.clone().unwrap_or_else(|| "No data to show".to_string()) }</p> },
                                        }}
                                    </div>
                                </>
                            },
                            None => html! {},
                        }}
                    </div>
                </>
            }
        ) }
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    let profile = use_state(|| None::<Profile>);
    let editing = use_state(|| false);
    let username = use_state(|| "".to_string());
    let email = use_state(|| "".to_string());
    let current_password = use_state(|| "".to_string());
    let new_password = use_state(|| "".to_string());
    let status = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let api = api.clone();
        let profile = profile.clone();
        let username = username.clone();
        let email = email.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.profile().await {
                        Ok(data) => {
                            username.set(data.username.clone());
                            email.set(data.email.clone());
                            profile.set(Some(data));
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_toggle_edit = {
        let editing = editing.clone();
        let status = status.clone();
        Callback::from(move |_| {
            editing.set(!*editing);
            status.set(None);
        })
    };

    let on_save_profile = {
        let api = api.clone();
        let profile = profile.clone();
        let editing = editing.clone();
        let username = username.clone();
        let email = email.clone();
        let status = status.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let username_val = username.trim().to_string();
            let email_val = email.trim().to_string();
            if username_val.is_empty() || email_val.is_empty() {
                error.set(Some("Username and email are required.".to_string()));
                return;
            }

            let api = api.clone();
            let profile = profile.clone();
            let editing = editing.clone();
            let status = status.clone();
            let error = error.clone();
            spawn_local(async move {
                match api.update_profile(&username_val, &email_val).await {
                    Ok(payload) => {
                        status.set(Some(payload.message.unwrap_or_else(|| {
                            "Profile updated successfully!".to_string()
                        })));
                        error.set(None);
                        editing.set(false);
                        if let Ok(data) = api.profile().await {
                            profile.set(Some(data));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_change_password = {
        let api = api.clone();
        let current_password = current_password.clone();
        let new_password = new_password.clone();
        let status = status.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let current_val = (*current_password).clone();
            let new_val = (*new_password).clone();
            if current_val.is_empty() || new_val.is_empty() {
                error.set(Some("Please fill in both password fields.".to_string()));
                return;
            }

            let api = api.clone();
            let current_password = current_password.clone();
            let new_password = new_password.clone();
            let status = status.clone();
            let error = error.clone();
            spawn_local(async move {
                match api.change_password(&current_val, &new_val).await {
                    Ok(payload) => {
                        status.set(Some(payload.message.unwrap_or_else(|| {
                            "Password updated successfully!".to_string()
                        })));
                        error.set(None);
                        current_password.set("".to_string());
                        new_password.set("".to_string());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        { page_shell(
            "Profile",
            html! {},
            html! {
                <>
                    if let Some(msg) = &*error {
                        <p class="text-sm text-red-500">{ msg.clone() }</p>
                    }
                    if let Some(msg) = &*status {
                        <p class="text-sm text-green-600">{ msg.clone() }</p>
                    }

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class="bg-card rounded-lg p-6 border border-border">
                            <h2 class="text-xl font-bold text-foreground mb-6">{"Account"}</h2>
                            { if *loading {
                                html! { <p class="text-sm text-muted-foreground">{"Loading profile..."}</p> }
                            } else {
                                html! {
                                    <div class="space-y-4">
                                        <div>
                                            <label class="block text-sm font-medium text-foreground mb-2">{"Username"}</label>
                                            { if *editing {
                                                html! {
                                                    <input type="text" value={(*username).clone()} oninput={{
                                                        let username = username.clone();
                                                        Callback::from(move |e: InputEvent| {
                                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                            username.set(input.value());
                                                        })
                                                    }} class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground" />
                                                }
                                            } else {
                                                html! { <p class="text-foreground">{ (*username).clone() }</p> }
                                            }}
                                        </div>
                                        <div>
                                            <label class="block text-sm font-medium text-foreground mb-2">{"Email"}</label>
                                            { if *editing {
                                                html! {
                                                    <input type="email" value={(*email).clone()} oninput={{
                                                        let email = email.clone();
                                                        Callback::from(move |e: InputEvent| {
                                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                            email.set(input.value());
                                                        })
                                                    }} class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground" />
                                                }
                                            } else {
                                                html! { <p class="text-foreground">{ (*email).clone() }</p> }
                                            }}
                                        </div>
                                        { if let Some(role) = profile.as_ref().and_then(|p| p.role.clone()) {
                                            html! {
                                                <div>
                                                    <label class="block text-sm font-medium text-foreground mb-2">{"Role"}</label>
                                                    <p class="text-muted-foreground">{ role }</p>
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }}
                                        <div class="flex gap-3">
                                            { if *editing {
                                                html! {
                                                    <>
                                                        <button onclick={on_save_profile} class="bg-primary text-primary-foreground px-4 py-2 rounded-lg font-semibold">{"Save"}</button>
                                                        <button onclick={on_toggle_edit.clone()} class="bg-secondary text-secondary-foreground px-4 py-2 rounded-lg font-semibold">{"Cancel"}</button>
                                                    </>
                                                }
                                            } else {
                                                html! {
                                                    <button onclick={on_toggle_edit.clone()} class="bg-primary text-primary-foreground px-4 py-2 rounded-lg font-semibold">{"Edit Profile"}</button>
                                                }
                                            }}
                                        </div>
                                    </div>
                                }
                            }}
                        </div>

                        <div class="bg-card rounded-lg p-6 border border-border">
                            <h2 class="text-xl font-bold text-foreground mb-6">{"Change Password"}</h2>
                            <div class="space-y-4">
                                <div>
                                    <label class="block text-sm font-medium text-foreground mb-2">{"Current Password"}</label>
                                    <input type="password" placeholder="Enter current password" value={(*current_password).clone()} oninput={{
                                        let current_password = current_password.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            current_password.set(input.value());
                                        })
                                    }} class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground" />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-foreground mb-2">{"New Password"}</label>
                                    <input type="password" placeholder="Enter new password" value={(*new_password).clone()} oninput={{
                                        let new_password = new_password.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            new_password.set(input.value());
                                        })
                                    }} class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground" />
                                </div>
                                <button onclick={on_change_password} class="bg-primary text-primary-foreground px-4 py-2 rounded-lg font-semibold">{"Update Password"}</button>
                            </div>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
