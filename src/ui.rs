pub fn render_index(api_base: &str, transaction_limit: usize) -> String {
    INDEX_HTML
        .replace("{{API_BASE}}", &escape_html(api_base))
        .replace("{{LIMIT}}", &transaction_limit.to_string())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Finance Dashboard</title>
  <style>
    :root {
      --bg-1: #f4f6fb;
      --bg-2: #c9d6ff;
      --ink: #2d3748;
      --muted: #718096;
      --accent: #667eea;
      --good: #38a169;
      --warn: #dd6b20;
      --bad: #e53e3e;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(45, 55, 72, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e9edf8 100%);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .connection {
      margin: 6px 0 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tab {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-weight: 600;
      background: #edf2f7;
      color: var(--ink);
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .tab-content {
      display: none;
      gap: 20px;
    }

    .tab-content.active {
      display: grid;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 20px;
      border: 1px solid rgba(45, 55, 72, 0.08);
    }

    .card h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .summary-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    .summary-item .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .summary-item .value {
      font-size: 1.5rem;
      font-weight: 600;
    }

    .summary-item.positive .value {
      color: var(--good);
    }

    .summary-item.negative .value {
      color: var(--bad);
    }

    .placeholder {
      text-align: center;
      color: var(--muted);
      padding: 20px;
    }

    .placeholder.failed {
      color: var(--bad);
    }

    .transaction-item {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 12px 0;
      border-bottom: 1px solid #edf2f7;
    }

    .transaction-category {
      font-weight: 600;
    }

    .transaction-description,
    .transaction-date {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .transaction-amount {
      font-weight: 700;
    }

    .transaction-amount.income {
      color: var(--good);
    }

    .transaction-amount.expense {
      color: var(--bad);
    }

    .budget-item {
      padding: 12px 0;
    }

    .budget-title {
      font-weight: 600;
    }

    .budget-detail {
      font-size: 0.9rem;
      color: var(--muted);
      margin: 4px 0;
    }

    .budget-progress {
      height: 10px;
      background: #edf2f7;
      border-radius: 999px;
      overflow: hidden;
    }

    .budget-progress-bar {
      height: 100%;
      background: var(--good);
      transition: width 300ms ease;
    }

    .budget-progress-bar.warning {
      background: var(--warn);
    }

    .budget-progress-bar.danger {
      background: var(--bad);
    }

    .advice-item {
      padding: 14px 16px;
      border-radius: 14px;
      background: #f7fafc;
      border-left: 4px solid var(--accent);
      margin-bottom: 12px;
    }

    .advice-item.alert {
      border-left-color: var(--bad);
      background: #fff5f5;
    }

    .advice-item.positive {
      border-left-color: var(--good);
      background: #f0fff4;
    }

    .advice-item.warning {
      border-left-color: var(--warn);
      background: #fffaf0;
    }

    .advice-header {
      display: flex;
      gap: 10px;
      font-weight: 600;
    }

    .advice-suggestion {
      margin-top: 6px;
      color: var(--muted);
      font-size: 0.9rem;
    }

    form {
      display: grid;
      gap: 10px;
    }

    input, select {
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid #cbd5e0;
      font-size: 1rem;
    }

    button[type="submit"] {
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    button[disabled] {
      opacity: 0.6;
      cursor: progress;
    }

    .forms {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 20px;
    }

    .notification {
      position: fixed;
      top: 20px;
      right: 20px;
      padding: 14px 20px;
      border-radius: 12px;
      background: var(--good);
      color: white;
      box-shadow: var(--shadow);
      opacity: 0;
      transform: translateY(-10px);
      transition: opacity 200ms ease, transform 200ms ease;
      pointer-events: none;
    }

    .notification.show {
      opacity: 1;
      transform: translateY(0);
    }

    .notification.error {
      background: var(--bad);
    }

    @media (max-width: 640px) {
      .app {
        padding: 22px 16px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Finance Dashboard</h1>
      <p class="connection"><span id="connectionStatus">Checking connection...</span> · <span>{{API_BASE}}</span></p>
    </header>

    <nav class="tabs">
      <button class="tab active" type="button" data-tab="dashboard">Dashboard</button>
      <button class="tab" type="button" data-tab="transactions">Add Transactions</button>
      <button class="tab" type="button" data-tab="budgets">Budgets</button>
      <button class="tab" type="button" data-tab="insights">AI Insights</button>
    </nav>

    <section id="dashboard" class="tab-content active">
      <div class="card">
        <h2>This month</h2>
        <div class="summary-grid">
          <div class="summary-item"><span class="label">Income</span><span id="monthlyIncome" class="value">$0.00</span></div>
          <div class="summary-item"><span class="label">Expenses</span><span id="monthlyExpenses" class="value">$0.00</span></div>
          <div class="summary-item" id="netBalanceItem"><span class="label">Net balance</span><span id="netBalance" class="value">$0.00</span></div>
          <div class="summary-item"><span class="label">Savings rate</span><span id="savingsRate" class="value">0.0%</span></div>
        </div>
      </div>
      <div class="card">
        <h2>Recent transactions</h2>
        <div id="recentTransactions"></div>
      </div>
      <div class="card">
        <h2>Budget overview</h2>
        <div id="budgetOverview"></div>
      </div>
    </section>

    <section id="transactions" class="tab-content">
      <div class="forms">
        <form id="expenseForm" class="card">
          <h2>Add expense</h2>
          <input id="expenseAmount" type="number" step="0.01" min="0.01" placeholder="Amount" required />
          <select id="expenseCategory" required>
            <option>Food</option>
            <option>Transportation</option>
            <option>Entertainment</option>
            <option>Utilities</option>
            <option>Healthcare</option>
            <option>Shopping</option>
            <option>Other</option>
          </select>
          <input id="expenseDescription" type="text" placeholder="Description" />
          <button type="submit">Add Expense</button>
        </form>
        <form id="incomeForm" class="card">
          <h2>Add income</h2>
          <input id="incomeAmount" type="number" step="0.01" min="0.01" placeholder="Amount" required />
          <input id="incomeSource" type="text" placeholder="Source" required />
          <input id="incomeDescription" type="text" placeholder="Description" />
          <button type="submit">Add Income</button>
        </form>
      </div>
    </section>

    <section id="budgets" class="tab-content">
      <form id="budgetForm" class="card">
        <h2>Set budget</h2>
        <input id="budgetCategory" type="text" placeholder="Category" required />
        <input id="budgetAmount" type="number" step="0.01" min="0" placeholder="Monthly amount" required />
        <button type="submit">Set Budget</button>
      </form>
      <div class="card">
        <h2>Budget status</h2>
        <div id="budgetStatus"></div>
      </div>
    </section>

    <section id="insights" class="tab-content">
      <div class="card">
        <h2>AI insights</h2>
        <div id="aiAdvice"></div>
      </div>
    </section>
  </main>

  <div id="notification" class="notification"></div>

  <script>
    const TRANSACTION_LIMIT = {{LIMIT}};
    const CONNECTION_ERROR = 'Connection error. Please make sure the finance API is running.';

    // One counter per region; a response only renders if no newer request
    // for the same region was started after it.
    const issued = {};
    const nextToken = (region) => {
      issued[region] = (issued[region] || 0) + 1;
      return issued[region];
    };
    const isCurrent = (region, token) => issued[region] === token;

    const escapeHtml = (value) =>
      String(value ?? '').replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      })[ch]);

    let notificationTimer = null;
    const showNotification = (message, type = 'success') => {
      const el = document.getElementById('notification');
      el.textContent = message;
      el.className = `notification ${type === 'success' ? '' : 'error'} show`;
      clearTimeout(notificationTimer);
      notificationTimer = setTimeout(() => el.classList.remove('show'), 3000);
    };

    const setConnection = (label) => {
      document.getElementById('connectionStatus').textContent = label;
    };

    const request = async (path, options = {}) => {
      let res;
      try {
        res = await fetch(path, {
          ...options,
          headers: { 'content-type': 'application/json', ...(options.headers || {}) }
        });
      } catch (err) {
        showNotification(CONNECTION_ERROR, 'error');
        setConnection('❌ Finance API disconnected');
        throw err;
      }
      if (!res.ok) {
        const message = (await res.text()) || `HTTP error ${res.status}`;
        if (res.status === 502) {
          showNotification(message, 'error');
          setConnection('❌ Finance API disconnected');
        }
        throw new Error(message);
      }
      return res.json();
    };

    const placeholder = (text, failed = false) =>
      `<p class="placeholder${failed ? ' failed' : ''}">${escapeHtml(text)}</p>`;

    const renderListing = (listing, renderItem) =>
      listing.state === 'empty'
        ? placeholder(listing.placeholder)
        : listing.items.map(renderItem).join('');

    const renderSummary = (summary) => {
      document.getElementById('monthlyIncome').textContent = summary.income_text;
      document.getElementById('monthlyExpenses').textContent = summary.expenses_text;
      document.getElementById('netBalance').textContent = summary.net_balance_text;
      document.getElementById('savingsRate').textContent = summary.savings_rate_text;
      document.getElementById('netBalanceItem').className = `summary-item ${summary.balance_state}`;
    };

    const progressBar = (row) => `
      <div class="budget-progress">
        <div class="budget-progress-bar ${row.status}" style="width: ${row.progress_fraction}%"></div>
      </div>`;

    const renderBudgetOverviewRow = (row) => `
      <div class="budget-item">
        <div class="budget-title">${escapeHtml(row.category)}</div>
        <div class="budget-detail">${escapeHtml(row.spent_text)} / ${escapeHtml(row.budget_text)} ($${escapeHtml(row.remaining_text)})</div>
        ${progressBar(row)}
      </div>`;

    const renderBudgetStatusRow = (row) => `
      <div class="budget-item">
        <div class="budget-title">${row.status_icon} ${escapeHtml(row.category)}</div>
        <div class="budget-detail">Spent: ${escapeHtml(row.spent_text)} / Budget: ${escapeHtml(row.budget_text)}</div>
        <div class="budget-detail">${row.over_budget ? '⚠️' : '✓'} $${escapeHtml(row.remaining_text)}</div>
        ${progressBar(row)}
        <div class="budget-detail">${escapeHtml(row.usage_text)}</div>
      </div>`;

    const renderTransactionRow = (row) => `
      <div class="transaction-item">
        <div class="transaction-info">
          <div class="transaction-category">${row.glyph} ${escapeHtml(row.category)}</div>
          <div class="transaction-description">${escapeHtml(row.description)}</div>
          <div class="transaction-date">${escapeHtml(row.date_text)}</div>
        </div>
        <div class="transaction-amount ${row.kind}">${escapeHtml(row.signed_amount_text)}</div>
      </div>`;

    const renderAdviceRow = (row) => `
      <div class="advice-item ${row.tone}">
        <div class="advice-header">
          <span>${escapeHtml(row.icon)}</span>
          <span>${escapeHtml(row.message)}</span>
        </div>
        ${row.suggestion ? `<div class="advice-suggestion">${escapeHtml(row.suggestion)}</div>` : ''}
      </div>`;

    const loadDashboard = async () => {
      const token = nextToken('dashboard');
      loadRecentTransactions();
      try {
        const view = await request('/view/dashboard');
        if (!isCurrent('dashboard', token)) return;
        renderSummary(view.summary);
        document.getElementById('budgetOverview').innerHTML =
          renderListing(view.budgets, renderBudgetOverviewRow);
      } catch (err) {
        if (!isCurrent('dashboard', token)) return;
        document.getElementById('budgetOverview').innerHTML = placeholder('Failed to load budgets', true);
      }
    };

    const loadRecentTransactions = async () => {
      const token = nextToken('transactions');
      const container = document.getElementById('recentTransactions');
      try {
        const listing = await request(`/view/transactions?limit=${TRANSACTION_LIMIT}`);
        if (!isCurrent('transactions', token)) return;
        container.innerHTML = renderListing(listing, renderTransactionRow);
      } catch (err) {
        if (!isCurrent('transactions', token)) return;
        container.innerHTML = placeholder('Failed to load transactions', true);
      }
    };

    const loadBudgetStatus = async () => {
      const token = nextToken('budgets');
      const container = document.getElementById('budgetStatus');
      try {
        const listing = await request('/view/budgets');
        if (!isCurrent('budgets', token)) return;
        container.innerHTML = renderListing(listing, renderBudgetStatusRow);
      } catch (err) {
        if (!isCurrent('budgets', token)) return;
        container.innerHTML = placeholder('Failed to load budget status', true);
      }
    };

    const loadAdvice = async () => {
      const token = nextToken('advice');
      const container = document.getElementById('aiAdvice');
      try {
        const listing = await request('/view/advice');
        if (!isCurrent('advice', token)) return;
        container.innerHTML = listing.state === 'empty'
          ? `<div class="advice-item">${escapeHtml(listing.placeholder)}</div>`
          : listing.items.map(renderAdviceRow).join('');
      } catch (err) {
        if (!isCurrent('advice', token)) return;
        container.innerHTML = '<div class="advice-item">❌ Failed to load AI insights. Please check your connection.</div>';
      }
    };

    const loaders = {
      dashboard: loadDashboard,
      budgets: loadBudgetStatus,
      insights: loadAdvice
    };

    const showTab = (event, tabName) => {
      document.querySelectorAll('.tab-content').forEach((el) => el.classList.remove('active'));
      document.querySelectorAll('.tab').forEach((el) => el.classList.remove('active'));
      document.getElementById(tabName).classList.add('active');
      event.currentTarget.classList.add('active');
      const load = loaders[tabName];
      if (load) load();
    };

    document.querySelectorAll('.tab').forEach((button) => {
      button.addEventListener('click', (event) => showTab(event, button.dataset.tab));
    });

    const submitWith = (form, busyLabel, action) => {
      form.addEventListener('submit', async (event) => {
        event.preventDefault();
        const button = form.querySelector('button[type="submit"]');
        const idleLabel = button.textContent;
        button.disabled = true;
        button.textContent = busyLabel;
        try {
          await action();
          form.reset();
        } finally {
          button.disabled = false;
          button.textContent = idleLabel;
        }
      });
    };

    const value = (id) => document.getElementById(id).value;

    const addTransaction = async (type, data) => {
      try {
        const ack = await request('/api/transactions', {
          method: 'POST',
          body: JSON.stringify({ ...data, type })
        });
        showNotification(ack.message);
        loadDashboard();
      } catch (err) {
        showNotification(`Failed to add ${type}: ${err.message}`, 'error');
        throw err;
      }
    };

    const setBudget = async (category, amount) => {
      try {
        const ack = await request('/api/budgets', {
          method: 'POST',
          body: JSON.stringify({ category, amount: parseFloat(amount) })
        });
        showNotification(ack.message);
        loadBudgetStatus();
      } catch (err) {
        showNotification(`Failed to set budget: ${err.message}`, 'error');
        throw err;
      }
    };

    submitWith(document.getElementById('expenseForm'), 'Adding...', () =>
      addTransaction('expense', {
        amount: parseFloat(value('expenseAmount')),
        category: value('expenseCategory'),
        description: value('expenseDescription')
      })
    );

    submitWith(document.getElementById('incomeForm'), 'Adding...', () =>
      addTransaction('income', {
        amount: parseFloat(value('incomeAmount')),
        category: value('incomeSource'),
        description: value('incomeDescription')
      })
    );

    submitWith(document.getElementById('budgetForm'), 'Setting...', () =>
      setBudget(value('budgetCategory'), value('budgetAmount'))
    );

    document.addEventListener('DOMContentLoaded', () => {
      loadDashboard();
      fetch('/view/connection')
        .then((res) => res.json())
        .then((view) => setConnection(view.label))
        .catch(() => setConnection('❌ Finance API disconnected'));
    });
  </script>
</body>
</html>
"#;
