pub fn render_index(month_label: &str) -> String {
    INDEX_HTML.replace("{{MONTH}}", month_label)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weight Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f2;
      --bg-2: #bcd9d0;
      --ink: #24312d;
      --accent: #2e8b6e;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f0ea 60%, #f2f7f4 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6762;
      font-size: 1rem;
    }

    .month-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .month-nav h2 {
      margin: 0;
      font-size: 1.4rem;
      text-align: center;
      flex: 1;
    }

    .nav-btn {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 8px 18px rgba(47, 72, 88, 0.25);
      padding: 10px 18px;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #70807a;
      font-size: 11px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      font-size: 0.9rem;
      color: #50605a;
    }

    .legend .swatch {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 4px;
      margin-right: 6px;
      vertical-align: -1px;
    }

    form.row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
      align-items: center;
    }

    input, select {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      background: white;
      color: var(--ink);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(46, 139, 110, 0.3);
    }

    .section-title {
      margin: 0 0 12px;
      font-size: 1.2rem;
      font-weight: 600;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .person {
      border: 1px solid rgba(47, 72, 88, 0.1);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 10px;
    }

    .person .head {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      gap: 10px;
    }

    .person .name {
      font-weight: 600;
      font-size: 1.05rem;
    }

    .person .last {
      color: #50605a;
      font-size: 0.9rem;
    }

    .bar {
      position: relative;
      height: 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .bar .fill {
      position: absolute;
      inset: 0 auto 0 0;
      border-radius: 999px;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .bounds {
      display: flex;
      justify-content: space-between;
      font-size: 0.85rem;
      color: #70807a;
    }

    .bounds b {
      color: var(--ink);
    }

    .status {
      font-size: 0.95rem;
      color: #5c6762;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .empty {
      color: #70807a;
      font-size: 0.95rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weight Tracker</h1>
      <p class="subtitle">Log daily weights per person and watch the month's trend.</p>
    </header>

    <section class="card">
      <div class="month-nav">
        <button class="nav-btn" id="prev-month" type="button" aria-label="previous month">&lsaquo;</button>
        <h2 id="month-label">{{MONTH}}</h2>
        <button class="nav-btn" id="next-month" type="button" aria-label="next month">&rsaquo;</button>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Monthly weight chart" role="img"></svg>
      </div>
      <div class="legend" id="legend"></div>
      <form class="row" id="log-form">
        <select id="log-person" required>
          <option value="">Select person</option>
        </select>
        <input id="log-date" type="date" required />
        <input id="log-weight" type="number" step="0.1" min="0.1" placeholder="Weight (kg)" required />
        <button class="btn-primary" type="submit">Log</button>
      </form>
    </section>

    <section class="card">
      <h3 class="section-title">Persons</h3>
      <form class="row" id="person-form">
        <input id="person-name" placeholder="Name" required />
        <input id="person-initial" type="number" step="0.1" min="0.1" placeholder="Starting weight (kg)" required />
        <input id="person-goal" type="number" step="0.1" min="0.1" placeholder="Goal weight (kg)" required />
        <button class="btn-primary" type="submit">Add person</button>
      </form>
      <div id="persons"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const monthLabelEl = document.getElementById('month-label');
    const chartEl = document.getElementById('chart');
    const legendEl = document.getElementById('legend');
    const personsEl = document.getElementById('persons');
    const statusEl = document.getElementById('status');
    const logPersonEl = document.getElementById('log-person');
    const logDateEl = document.getElementById('log-date');
    const logWeightEl = document.getElementById('log-weight');

    const palette = ['#2e8b6e', '#ff6b4a', '#2f4858', '#b25690', '#c9a227', '#4a7bb7'];

    let overview = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const colorFor = (index) => palette[index % palette.length];

    const renderChart = () => {
      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const lastDay = Math.max(overview.month.days, 1);
      const weights = overview.lines.flatMap((line) => line.points.map((p) => p.weight));

      if (!weights.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No entries this month</text>';
        legendEl.innerHTML = '';
        return;
      }

      let min = Math.min(...weights);
      let max = Math.max(...weights);
      if (min === max) {
        min -= 1;
        max += 1;
      }

      const range = max - min;
      const xStep = lastDay > 1 ? (width - paddingX * 2) / (lastDay - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (day) => paddingX + (day - 1) * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value.toFixed(1)}</text>`;
      }

      const labelEvery = lastDay > 16 ? 5 : 2;
      let xLabels = '';
      for (let day = 1; day <= lastDay; day += 1) {
        if (day !== 1 && day !== lastDay && day % labelEvery !== 0) {
          continue;
        }
        xLabels += `<text class="chart-label" x="${x(day)}" y="${height - paddingY + 18}" text-anchor="middle">${day}</text>`;
      }

      let series = '';
      overview.lines.forEach((line, index) => {
        if (!line.points.length) {
          return;
        }
        const color = colorFor(index);
        const path = line.points
          .map((point, i) => `${i === 0 ? 'M' : 'L'} ${x(point.day).toFixed(2)} ${y(point.weight).toFixed(2)}`)
          .join(' ');
        series += `<path class="chart-line" stroke="${color}" d="${path}" />`;
        series += line.points
          .map((point) => `<circle class="chart-point" stroke="${color}" cx="${x(point.day)}" cy="${y(point.weight)}" r="4" />`)
          .join('');
      });

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `${grid}${xLabels}${series}`;

      legendEl.innerHTML = overview.lines
        .filter((line) => line.points.length)
        .map((line, index) => `<span><span class="swatch" style="background:${colorFor(index)}"></span>${line.name}</span>`)
        .join('');
    };

    const renderPersons = () => {
      const options = overview.persons
        .map((p) => `<option value="${p.id}">${p.name}</option>`)
        .join('');
      const selected = logPersonEl.value;
      logPersonEl.innerHTML = `<option value="">Select person</option>${options}`;
      if (overview.persons.some((p) => p.id === selected)) {
        logPersonEl.value = selected;
      }

      if (!overview.persons.length) {
        personsEl.innerHTML = '<p class="empty">No persons yet. Add one to start logging.</p>';
        return;
      }

      personsEl.innerHTML = overview.persons
        .map((p) => {
          const last = p.last_entry
            ? `<span class="last">${p.last_entry.weight} kg on ${p.last_entry.date}</span>`
            : '<span class="last">no entries yet</span>';
          const fill = Math.min(p.progress_pct, 100);
          return `
            <div class="person">
              <div class="head">
                <span class="name">${p.name}</span>
                ${last}
              </div>
              <div class="bar"><div class="fill" style="width:${fill}%"></div></div>
              <div class="bounds">
                <span><b>${p.initial_weight} kg</b> start</span>
                <span>${p.progress_pct.toFixed(0)}%</span>
                <span><b>${p.goal_weight} kg</b> goal</span>
              </div>
            </div>`;
        })
        .join('');
    };

    const renderAll = () => {
      monthLabelEl.textContent = overview.month.label;
      renderChart();
      renderPersons();
    };

    const loadOverview = async () => {
      const res = await fetch('/api/overview');
      if (!res.ok) {
        throw new Error('Unable to load data');
      }
      overview = await res.json();
      renderAll();
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    document.getElementById('prev-month').addEventListener('click', () => {
      post('/api/month/prev').then(loadOverview).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-month').addEventListener('click', () => {
      post('/api/month/next').then(loadOverview).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('person-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const body = {
        name: document.getElementById('person-name').value,
        initial_weight: Number(document.getElementById('person-initial').value),
        goal_weight: Number(document.getElementById('person-goal').value)
      };
      post('/api/persons', body)
        .then(() => {
          event.target.reset();
          setStatus('Person added', 'ok');
          return loadOverview();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('log-form').addEventListener('submit', (event) => {
      event.preventDefault();
      if (!logPersonEl.value) {
        setStatus('Select a person first', 'error');
        return;
      }
      const body = {
        person_id: logPersonEl.value,
        date: logDateEl.value,
        weight: Number(logWeightEl.value)
      };
      post('/api/weights', body)
        .then(() => {
          logWeightEl.value = '';
          setStatus('Saved', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
          return loadOverview();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    logDateEl.value = new Date().toISOString().slice(0, 10);
    loadOverview().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
